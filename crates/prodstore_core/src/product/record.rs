//! Product record.

use serde::{Deserialize, Serialize};

/// The single record type held by a store.
///
/// `id` is the only uniqueness constraint. `created_at` is set once by the
/// factory and never touched by updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Globally unique identifier, generated at creation.
    pub id: String,
    /// Display name. Empty means unset.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Unit price. Zero means unset.
    #[serde(default, skip_serializing_if = "is_zero")]
    pub price: f64,
    /// Creation time in UNIX seconds.
    #[serde(default, skip_serializing_if = "is_unset")]
    pub created_at: u32,
}

impl Product {
    /// Creates a product with the given fields.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64, created_at: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            created_at,
        }
    }

    /// Creates a product carrying only an id.
    ///
    /// Used by adapters that answer `add` with the new id alone.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

fn is_zero(value: &f64) -> bool {
    *value == 0.0
}

fn is_unset(value: &u32) -> bool {
    *value == 0
}
