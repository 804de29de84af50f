//! Partial update requests.

use crate::error::{StoreError, StoreResult};

/// A partial update of one product.
///
/// An empty `name` and a zero `price` both mean "not supplied". A caller
/// therefore cannot set a name to `""` or a price to `0` through an update.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    /// Target product id.
    pub id: String,
    /// New name, or empty to leave unchanged.
    pub name: String,
    /// New price, or zero to leave unchanged.
    pub price: f64,
}

impl ProductUpdate {
    /// Creates an update that supplies no fields yet.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Sets the new name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the new price.
    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Builds an update from raw wire values.
    ///
    /// A price that fails to parse, including one with surrounding
    /// whitespace, is treated as not supplied.
    ///
    /// # Errors
    ///
    /// - [`StoreError::InvalidId`] when `id` is empty.
    /// - [`StoreError::NoUpdateParams`] when neither field ends up supplied.
    pub fn parse(id: &str, name: &str, price: &str) -> StoreResult<Self> {
        if id.is_empty() {
            return Err(StoreError::InvalidId);
        }
        let update = Self {
            id: id.to_string(),
            name: name.to_string(),
            price: price.parse::<f64>().unwrap_or(0.0),
        };
        if !update.has_changes() {
            return Err(StoreError::NoUpdateParams);
        }
        Ok(update)
    }

    /// Returns true if a name was supplied.
    #[must_use]
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    /// Returns true if a price was supplied.
    #[must_use]
    pub fn has_price(&self) -> bool {
        self.price != 0.0
    }

    /// Returns true if at least one field was supplied.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.has_name() || self.has_price()
    }
}
