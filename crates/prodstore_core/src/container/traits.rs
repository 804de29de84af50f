//! Container trait.

use crate::config::Backend;
use crate::error::StoreResult;
use crate::product::Product;

/// A collection of products kept in ascending `id` order.
///
/// `locate` uses lower-bound semantics: the returned position is the first
/// slot whose id is `>=` the queried id. Ids are unique, so `found == true`
/// means the position holds the exact match and `found == false` means the
/// position is where that id would be inserted.
///
/// A position is only valid until the next mutation of the container.
pub trait OrderedContainer: Default + Send + Sync + 'static {
    /// Opaque location of a slot in the container.
    type Position;

    /// Backend this container implements.
    const BACKEND: Backend;

    /// Creates an empty container sized for `capacity` products.
    fn with_capacity(capacity: usize) -> Self;

    /// Finds the lower-bound position of `id`.
    fn locate(&self, id: &str) -> (Self::Position, bool);

    /// Returns the product stored at `position`, if any.
    fn get(&self, position: &Self::Position) -> Option<&Product>;

    /// Returns the product stored at `position` for in-place mutation.
    fn get_mut(&mut self, position: &Self::Position) -> Option<&mut Product>;

    /// Inserts `product` at a position obtained from `locate(&product.id)`.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyExists` if the position already holds a product with
    /// the same id, and `InvalidPosition` if the product's id does not belong
    /// at `position`. The container is left unchanged in both cases.
    fn insert_at(&mut self, position: Self::Position, product: Product) -> StoreResult<()>;

    /// Removes and returns the product at `position`.
    fn remove_at(&mut self, position: Self::Position) -> Option<Product>;

    /// Copies every product out in ascending id order.
    fn scan(&self) -> Vec<Product>;

    /// Returns the number of stored products.
    fn len(&self) -> usize;

    /// Returns true if no products are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
