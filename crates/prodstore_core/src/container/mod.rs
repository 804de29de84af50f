//! Ordered containers backing a store.
//!
//! A container keeps every product sorted by id and answers position
//! queries. It does no locking of its own; the store wraps it in a single
//! reader/writer lock.
//!
//! # Container Types
//!
//! - [`SortedVec`]: dense sorted sequence, O(log n) lookup, O(n) insert/remove
//! - [`BTreeContainer`]: balanced tree, O(log n) for all three

mod btree;
mod sorted;
mod traits;

pub use btree::BTreeContainer;
pub use sorted::SortedVec;
pub use traits::OrderedContainer;
