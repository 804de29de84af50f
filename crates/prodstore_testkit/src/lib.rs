//! # Prodstore Testkit
//!
//! Test utilities for prodstore.
//!
//! This crate provides:
//! - Store fixtures for every backend
//! - Property-based operation generators using proptest
//! - A reference-model checker for operation sequences
//! - Stress testing utilities
//!
//! ## Usage
//!
//! ```rust,ignore
//! use prodstore_testkit::prelude::*;
//!
//! #[test]
//! fn test_every_backend() {
//!     for_each_backend(|store| {
//!         let id = store.add(&ctx()).unwrap();
//!         // ... test operations
//!     });
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod model;
pub mod stress;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::model::*;
    pub use crate::stress::*;
}

pub use fixtures::*;
pub use generators::*;
pub use model::*;
pub use stress::*;
