//! Backend registry: builds a store from configuration.

use crate::config::{Backend, StoreConfig};
use crate::container::{BTreeContainer, SortedVec};
use crate::store::{ProductStore, Store};
use std::sync::Arc;

/// Opens an empty store with the configured backend.
///
/// The returned handle is shared by every caller; there is no global
/// instance.
#[must_use]
pub fn open_store(config: &StoreConfig) -> Arc<dyn ProductStore> {
    match config.backend {
        Backend::SortedVec => Arc::new(Store::<SortedVec>::with_capacity(config.initial_capacity)),
        Backend::BTree => Arc::new(Store::<BTreeContainer>::with_capacity(
            config.initial_capacity,
        )),
    }
}
