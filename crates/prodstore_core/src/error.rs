//! Error types for the product store.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors returned by store operations.
///
/// `NoRowsUpdated`, `NoRowsDeleted` and `NotFound` all mean the target id is
/// absent. They are kept apart because callers map them independently.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// Update was called with an empty name and a zero price.
    #[error("no parameters were passed to be updated")]
    NoUpdateParams,

    /// Update targeted an id that is not stored.
    #[error("no rows updated")]
    NoRowsUpdated {
        /// The id that was not found.
        id: String,
    },

    /// Delete targeted an id that is not stored.
    #[error("no rows deleted")]
    NoRowsDeleted {
        /// The id that was not found.
        id: String,
    },

    /// Lookup targeted an id that is not stored.
    #[error("product not found: {id}")]
    NotFound {
        /// The id that was not found.
        id: String,
    },

    /// A freshly generated id collided with a stored one.
    #[error("product already exists: {id}")]
    AlreadyExists {
        /// The colliding id.
        id: String,
    },

    /// A container insert was given a position that does not belong to the
    /// product's id.
    #[error("insert position does not fit product: {id}")]
    InvalidPosition {
        /// The id of the product being inserted.
        id: String,
    },

    /// An update request carried an empty id.
    #[error("invalid id")]
    InvalidId,

    /// The call context was cancelled before the operation started.
    #[error("operation cancelled")]
    Cancelled,

    /// The call context deadline passed before the operation started.
    #[error("deadline exceeded")]
    DeadlineExceeded,
}

impl StoreError {
    /// Creates a no-rows-updated error.
    pub fn no_rows_updated(id: impl Into<String>) -> Self {
        Self::NoRowsUpdated { id: id.into() }
    }

    /// Creates a no-rows-deleted error.
    pub fn no_rows_deleted(id: impl Into<String>) -> Self {
        Self::NoRowsDeleted { id: id.into() }
    }

    /// Creates a not-found error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Creates an already-exists error.
    pub fn already_exists(id: impl Into<String>) -> Self {
        Self::AlreadyExists { id: id.into() }
    }

    /// Creates an invalid-position error.
    pub fn invalid_position(id: impl Into<String>) -> Self {
        Self::InvalidPosition { id: id.into() }
    }

    /// Returns true when the error was caused by caller input or by the
    /// target being absent, as opposed to an internal failure.
    ///
    /// Protocol adapters use this to pick between "bad request" and
    /// "internal" status codes.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::NoUpdateParams
                | Self::NoRowsUpdated { .. }
                | Self::NoRowsDeleted { .. }
                | Self::NotFound { .. }
                | Self::InvalidId
        )
    }

    /// Returns true when the target id was absent.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(
            self,
            Self::NoRowsUpdated { .. } | Self::NoRowsDeleted { .. } | Self::NotFound { .. }
        )
    }
}

/// Errors raised while building a store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The backend name is not registered.
    #[error("unknown backend `{name}`; expected one of: sorted, btree")]
    UnknownBackend {
        /// The name that was requested.
        name: String,
    },
}
