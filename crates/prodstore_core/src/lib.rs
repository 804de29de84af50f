//! # Prodstore Core
//!
//! Concurrent, ordered, in-process product store.
//!
//! This crate provides:
//! - [`Product`] records and the [`ProductFactory`] that mints them
//! - Ordered containers behind the [`OrderedContainer`] trait
//! - [`Store`], the CRUD contract guarded by one reader/writer lock
//! - The error taxonomy callers map to their wire formats
//!
//! ## Example
//!
//! ```rust
//! use prodstore_core::{open_store, Backend, Context, StoreConfig, StoreError};
//!
//! let store = open_store(&StoreConfig::new().backend(Backend::BTree));
//! let ctx = Context::background();
//!
//! let id = store.add(&ctx).unwrap();
//! store.delete(&ctx, &id).unwrap();
//! assert!(matches!(store.get(&ctx, &id), Err(StoreError::NotFound { .. })));
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod container;
mod context;
mod error;
mod product;
mod registry;
mod store;

pub use config::{Backend, StoreConfig};
pub use container::{BTreeContainer, OrderedContainer, SortedVec};
pub use context::Context;
pub use error::{ConfigError, StoreError, StoreResult};
pub use product::{unix_now, DemoFactory, Product, ProductFactory, ProductUpdate};
pub use registry::open_store;
pub use store::{ProductStore, Store};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
