//! Store fixtures and helpers.

use prodstore_core::{open_store, Backend, Context, ProductStore, StoreConfig};
use std::sync::Arc;

/// A store under test, remembering which backend it runs on.
pub struct TestStore {
    /// The store handle.
    pub store: Arc<dyn ProductStore>,
    /// Backend behind the handle.
    pub backend: Backend,
}

impl TestStore {
    /// Opens an empty store on `backend`.
    pub fn new(backend: Backend) -> Self {
        Self {
            store: open_store(&StoreConfig::new().backend(backend)),
            backend,
        }
    }

    /// Opens a store on `backend` holding `count` generated products.
    ///
    /// Returns the store and the ids in insertion order.
    pub fn populated(backend: Backend, count: usize) -> (Self, Vec<String>) {
        let test_store = Self::new(backend);
        let ids = (0..count)
            .map(|_| test_store.store.add(&ctx()).expect("add should succeed"))
            .collect();
        (test_store, ids)
    }

    /// Returns a new handle to the same store.
    pub fn handle(&self) -> Arc<dyn ProductStore> {
        Arc::clone(&self.store)
    }
}

impl std::ops::Deref for TestStore {
    type Target = dyn ProductStore;

    fn deref(&self) -> &Self::Target {
        self.store.as_ref()
    }
}

/// Returns a background context.
pub fn ctx() -> Context {
    Context::background()
}

/// Runs `f` once against a fresh store on each backend.
///
/// # Example
///
/// ```rust
/// use prodstore_testkit::{ctx, for_each_backend};
///
/// for_each_backend(|store| {
///     assert!(store.get_all(&ctx()).unwrap().is_empty());
/// });
/// ```
pub fn for_each_backend<F>(mut f: F)
where
    F: FnMut(&TestStore),
{
    for backend in Backend::ALL {
        let store = TestStore::new(backend);
        f(&store);
    }
}
