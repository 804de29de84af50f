//! BTree container.

use crate::config::Backend;
use crate::container::traits::OrderedContainer;
use crate::error::{StoreError, StoreResult};
use crate::product::Product;
use std::collections::BTreeMap;
use std::ops::Bound;

/// Balanced-tree container keyed by product id.
///
/// Positions are the lower-bound key itself: the queried id when it is
/// present, otherwise the id being inserted.
#[derive(Debug, Clone, Default)]
pub struct BTreeContainer {
    entries: BTreeMap<String, Product>,
}

impl BTreeContainer {
    /// Returns the smallest stored id `>= id`.
    pub fn lower_bound(&self, id: &str) -> Option<&str> {
        self.entries
            .range::<str, _>((Bound::Included(id), Bound::Unbounded))
            .next()
            .map(|(key, _)| key.as_str())
    }
}

impl OrderedContainer for BTreeContainer {
    type Position = String;

    const BACKEND: Backend = Backend::BTree;

    fn with_capacity(_capacity: usize) -> Self {
        Self::default()
    }

    fn locate(&self, id: &str) -> (String, bool) {
        (id.to_string(), self.entries.contains_key(id))
    }

    fn get(&self, position: &String) -> Option<&Product> {
        self.entries.get(position)
    }

    fn get_mut(&mut self, position: &String) -> Option<&mut Product> {
        self.entries.get_mut(position)
    }

    fn insert_at(&mut self, position: String, product: Product) -> StoreResult<()> {
        if position != product.id {
            return Err(StoreError::invalid_position(product.id));
        }
        if self.entries.contains_key(&position) {
            return Err(StoreError::already_exists(position));
        }
        self.entries.insert(position, product);
        Ok(())
    }

    fn remove_at(&mut self, position: String) -> Option<Product> {
        self.entries.remove(&position)
    }

    fn scan(&self) -> Vec<Product> {
        self.entries.values().cloned().collect()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
