//! Product store: the CRUD contract over an ordered container.

use crate::config::Backend;
use crate::container::{OrderedContainer, SortedVec};
use crate::context::Context;
use crate::error::{StoreError, StoreResult};
use crate::product::{DemoFactory, Product, ProductFactory, ProductUpdate};
use parking_lot::RwLock;

/// The CRUD contract shared by every store backend.
///
/// Protocol adapters hold an `Arc<dyn ProductStore>` and translate results
/// and errors into their own wire format. Every call takes a [`Context`]
/// that is checked once before any work is done.
pub trait ProductStore: Send + Sync {
    /// Creates a product with generated id and demo content.
    ///
    /// Returns the new id.
    fn add(&self, ctx: &Context) -> StoreResult<String>;

    /// Applies the supplied fields of `update` to an existing product.
    ///
    /// `NoUpdateParams` is reported before existence is checked.
    fn update(&self, ctx: &Context, update: &ProductUpdate) -> StoreResult<()>;

    /// Removes a product.
    fn delete(&self, ctx: &Context, id: &str) -> StoreResult<()>;

    /// Returns a copy of one product.
    fn get(&self, ctx: &Context, id: &str) -> StoreResult<Product>;

    /// Returns a copy of every product in ascending id order.
    fn get_all(&self, ctx: &Context) -> StoreResult<Vec<Product>>;

    /// Returns the number of stored products.
    fn len(&self) -> usize;

    /// Returns true if the store holds no products.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the container strategy behind this store.
    fn backend(&self) -> Backend;
}

/// In-process store over an [`OrderedContainer`].
///
/// One reader/writer lock guards the whole container. `add`, `update` and
/// `delete` hold it exclusively across locate and mutate; `get` and
/// `get_all` share it. No I/O happens while the lock is held.
///
/// # Example
///
/// ```rust
/// use prodstore_core::{Context, ProductStore, ProductUpdate, Store};
///
/// let store = Store::new();
/// let ctx = Context::background();
///
/// let id = store.add(&ctx).unwrap();
/// store.update(&ctx, &ProductUpdate::new(&id).with_name("Widget")).unwrap();
/// assert_eq!(store.get(&ctx, &id).unwrap().name, "Widget");
/// ```
pub struct Store<C: OrderedContainer = SortedVec> {
    products: RwLock<C>,
    factory: Box<dyn ProductFactory>,
}

impl Store<SortedVec> {
    /// Creates an empty sorted-vector store with the demo factory.
    #[must_use]
    pub fn new() -> Self {
        Self::with_container(SortedVec::default())
    }
}

impl Default for Store<SortedVec> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: OrderedContainer> Store<C> {
    /// Creates an empty store over a container pre-sized for `capacity`.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_container(C::with_capacity(capacity))
    }

    /// Creates a store over `container` with the demo factory.
    #[must_use]
    pub fn with_container(container: C) -> Self {
        Self::with_parts(container, Box::new(DemoFactory::new()))
    }

    /// Creates an empty store that mints products with `factory`.
    #[must_use]
    pub fn with_factory(factory: impl ProductFactory + 'static) -> Self {
        Self::with_parts(C::default(), Box::new(factory))
    }

    fn with_parts(container: C, factory: Box<dyn ProductFactory>) -> Self {
        tracing::info!(
            backend = %C::BACKEND,
            preloaded = container.len(),
            "product store created"
        );
        Self {
            products: RwLock::new(container),
            factory,
        }
    }
}

impl<C: OrderedContainer> ProductStore for Store<C> {
    fn add(&self, ctx: &Context) -> StoreResult<String> {
        ctx.check()?;
        let product = self.factory.create();
        let id = product.id.clone();

        let mut products = self.products.write();
        let (position, found) = products.locate(&id);
        if found {
            return Err(StoreError::already_exists(id));
        }
        products.insert_at(position, product)?;
        drop(products);

        tracing::debug!(id = %id, "product added");
        Ok(id)
    }

    fn update(&self, ctx: &Context, update: &ProductUpdate) -> StoreResult<()> {
        ctx.check()?;
        if !update.has_changes() {
            return Err(StoreError::NoUpdateParams);
        }

        let mut products = self.products.write();
        let (position, found) = products.locate(&update.id);
        let product = match products.get_mut(&position) {
            Some(product) if found => product,
            _ => return Err(StoreError::no_rows_updated(update.id.as_str())),
        };
        if update.has_name() {
            product.name.clone_from(&update.name);
        }
        if update.has_price() {
            product.price = update.price;
        }
        drop(products);

        tracing::debug!(id = %update.id, "product updated");
        Ok(())
    }

    fn delete(&self, ctx: &Context, id: &str) -> StoreResult<()> {
        ctx.check()?;

        let mut products = self.products.write();
        let (position, found) = products.locate(id);
        if !found || products.remove_at(position).is_none() {
            return Err(StoreError::no_rows_deleted(id));
        }
        drop(products);

        tracing::debug!(id = %id, "product deleted");
        Ok(())
    }

    fn get(&self, ctx: &Context, id: &str) -> StoreResult<Product> {
        ctx.check()?;

        let products = self.products.read();
        let (position, found) = products.locate(id);
        match products.get(&position) {
            Some(product) if found => Ok(product.clone()),
            _ => Err(StoreError::not_found(id)),
        }
    }

    fn get_all(&self, ctx: &Context) -> StoreResult<Vec<Product>> {
        ctx.check()?;

        let snapshot = self.products.read().scan();
        tracing::trace!(count = snapshot.len(), "products scanned");
        Ok(snapshot)
    }

    fn len(&self) -> usize {
        self.products.read().len()
    }

    fn backend(&self) -> Backend {
        C::BACKEND
    }
}

impl<C: OrderedContainer> std::fmt::Debug for Store<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("backend", &C::BACKEND)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
