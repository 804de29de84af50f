//! Benchmark utilities.

#![warn(missing_docs)]

use prodstore_core::{Context, OrderedContainer, ProductStore, Store};
use rand::seq::SliceRandom;

/// Creates a store of container type `C` holding `count` products.
///
/// Returns the store and its ids in random order.
pub fn populated<C: OrderedContainer>(count: usize) -> (Store<C>, Vec<String>) {
    let store = Store::<C>::with_capacity(count);
    let ctx = Context::background();
    let mut ids: Vec<String> = (0..count)
        .map(|_| store.add(&ctx).expect("add should succeed"))
        .collect();
    ids.shuffle(&mut rand::thread_rng());
    (store, ids)
}
