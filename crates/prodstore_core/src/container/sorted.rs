//! Sorted-vector container.

use crate::config::Backend;
use crate::container::traits::OrderedContainer;
use crate::error::{StoreError, StoreResult};
use crate::product::Product;

/// Dense sequence of products sorted by id.
///
/// Lookup is a binary search. Insert and remove shift the tail of the
/// sequence, so they cost O(n) in the worst case.
///
/// # Example
///
/// ```rust
/// use prodstore_core::{OrderedContainer, Product, SortedVec};
///
/// let mut items = SortedVec::default();
/// let (pos, found) = items.locate("b");
/// assert!(!found);
/// items.insert_at(pos, Product::with_id("b")).unwrap();
///
/// let (pos, found) = items.locate("a");
/// items.insert_at(pos, Product::with_id("a")).unwrap();
/// assert!(!found);
///
/// let ids: Vec<_> = items.scan().into_iter().map(|p| p.id).collect();
/// assert_eq!(ids, ["a", "b"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SortedVec {
    items: Vec<Product>,
}

impl OrderedContainer for SortedVec {
    type Position = usize;

    const BACKEND: Backend = Backend::SortedVec;

    fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    fn locate(&self, id: &str) -> (usize, bool) {
        let position = self.items.partition_point(|p| p.id.as_str() < id);
        let found = self.items.get(position).is_some_and(|p| p.id == id);
        (position, found)
    }

    fn get(&self, position: &usize) -> Option<&Product> {
        self.items.get(*position)
    }

    fn get_mut(&mut self, position: &usize) -> Option<&mut Product> {
        self.items.get_mut(*position)
    }

    fn insert_at(&mut self, position: usize, product: Product) -> StoreResult<()> {
        if self.items.get(position).is_some_and(|p| p.id == product.id) {
            return Err(StoreError::already_exists(product.id));
        }
        let fits = position <= self.items.len()
            && (position == 0 || self.items[position - 1].id < product.id)
            && self
                .items
                .get(position)
                .map_or(true, |next| product.id < next.id);
        if !fits {
            return Err(StoreError::invalid_position(product.id));
        }
        self.items.insert(position, product);
        Ok(())
    }

    fn remove_at(&mut self, position: usize) -> Option<Product> {
        if position < self.items.len() {
            Some(self.items.remove(position))
        } else {
            None
        }
    }

    fn scan(&self) -> Vec<Product> {
        self.items.clone()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn insert(items: &mut SortedVec, id: &str) {
        let (pos, found) = items.locate(id);
        assert!(!found);
        items.insert_at(pos, Product::with_id(id)).unwrap();
    }

    fn ids(items: &SortedVec) -> Vec<String> {
        items.scan().into_iter().map(|p| p.id).collect()
    }

    #[test]
    fn locate_empty() {
        let items = SortedVec::default();
        assert_eq!(items.locate("x"), (0, false));
    }

    #[test]
    fn locate_is_lower_bound() {
        let mut items = SortedVec::default();
        for id in ["b", "d", "f"] {
            insert(&mut items, id);
        }

        assert_eq!(items.locate("a"), (0, false));
        assert_eq!(items.locate("b"), (0, true));
        assert_eq!(items.locate("c"), (1, false));
        assert_eq!(items.locate("d"), (1, true));
        assert_eq!(items.locate("f"), (2, true));
        assert_eq!(items.locate("g"), (3, false));
    }

    #[test]
    fn insert_keeps_order() {
        let mut items = SortedVec::default();
        for id in ["m", "c", "x", "a", "k"] {
            insert(&mut items, id);
        }
        assert_eq!(ids(&items), ["a", "c", "k", "m", "x"]);
    }

    #[test]
    fn insert_duplicate_fails() {
        let mut items = SortedVec::default();
        insert(&mut items, "a");

        let (pos, found) = items.locate("a");
        assert!(found);
        let err = items.insert_at(pos, Product::new("a", "dup", 1.0, 1)).unwrap_err();
        assert_eq!(err, StoreError::already_exists("a"));
        assert_eq!(items.len(), 1);
        assert!(items.get(&pos).unwrap().name.is_empty());
    }

    #[test]
    fn insert_at_wrong_position_fails() {
        let mut items = SortedVec::default();
        for id in ["b", "d"] {
            insert(&mut items, id);
        }

        for (pos, id) in [(0, "c"), (2, "a"), (1, "e"), (7, "z")] {
            assert_eq!(
                items.insert_at(pos, Product::with_id(id)),
                Err(StoreError::invalid_position(id))
            );
        }
        assert_eq!(ids(&items), ["b", "d"]);
    }

    #[test]
    fn remove_shifts_left() {
        let mut items = SortedVec::default();
        for id in ["a", "b", "c"] {
            insert(&mut items, id);
        }

        let (pos, found) = items.locate("b");
        assert!(found);
        assert_eq!(items.remove_at(pos).unwrap().id, "b");
        assert_eq!(ids(&items), ["a", "c"]);
        assert_eq!(items.locate("c"), (1, true));
    }

    #[test]
    fn remove_out_of_range() {
        let mut items = SortedVec::default();
        assert!(items.remove_at(0).is_none());
    }

    #[test]
    fn scan_is_a_copy() {
        let mut items = SortedVec::default();
        insert(&mut items, "a");
        let snapshot = items.scan();

        insert(&mut items, "b");
        let (pos, _) = items.locate("a");
        items.get_mut(&pos).unwrap().name = "changed".into();

        assert_eq!(snapshot.len(), 1);
        assert!(snapshot[0].name.is_empty());
    }
}
