//! Store configuration.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Internal container strategy of a store.
///
/// Both strategies satisfy the same contract; they differ only in cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Backend {
    /// Dense sorted vector with binary search.
    #[default]
    SortedVec,
    /// Balanced tree keyed by id.
    BTree,
}

impl Backend {
    /// All registered backends.
    pub const ALL: [Backend; 2] = [Backend::SortedVec, Backend::BTree];

    /// Canonical name of this backend.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SortedVec => "sorted",
            Self::BTree => "btree",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sorted" | "sorted_vec" | "in_memory2" => Ok(Self::SortedVec),
            "btree" | "in_memory" => Ok(Self::BTree),
            other => Err(ConfigError::UnknownBackend {
                name: other.to_string(),
            }),
        }
    }
}

/// Configuration for opening a store.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    /// Container strategy.
    pub backend: Backend,

    /// Number of products to pre-allocate room for.
    pub initial_capacity: usize,
}

impl StoreConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the container strategy.
    #[must_use]
    pub const fn backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    /// Sets the pre-allocation hint.
    #[must_use]
    pub const fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}
