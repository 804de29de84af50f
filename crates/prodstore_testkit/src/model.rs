//! Reference-model checking for operation sequences.
//!
//! [`ModelChecker`] replays [`StoreOp`]s against a real store and against a
//! `BTreeMap` model side by side, and reports the first divergence.

use crate::fixtures::ctx;
use crate::generators::StoreOp;
use prodstore_core::{Product, ProductStore, ProductUpdate, StoreError};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Replays operations against a store and a reference model.
pub struct ModelChecker {
    store: Arc<dyn ProductStore>,
    model: BTreeMap<String, Product>,
    issued: Vec<String>,
}

impl ModelChecker {
    /// Creates a checker over an empty store.
    ///
    /// # Panics
    ///
    /// Panics if `store` is not empty.
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        assert!(store.is_empty(), "model checking needs an empty store");
        Self {
            store,
            model: BTreeMap::new(),
            issued: Vec::new(),
        }
    }

    /// Ids handed out by `add` so far, deleted ones included.
    pub fn issued(&self) -> &[String] {
        &self.issued
    }

    /// Applies one operation to both sides and compares the outcome.
    pub fn apply(&mut self, op: &StoreOp) -> Result<(), String> {
        match op {
            StoreOp::Add => self.apply_add(),
            StoreOp::Update {
                target,
                name,
                price,
            } => {
                let id = target.resolve(&self.issued);
                let update = ProductUpdate::new(id).with_name(name.as_str()).with_price(*price);
                self.apply_update(&update)
            }
            StoreOp::Delete { target } => {
                let id = target.resolve(&self.issued);
                let expected = match self.model.remove(&id) {
                    Some(_) => Ok(()),
                    None => Err(StoreError::no_rows_deleted(id.as_str())),
                };
                compare("delete", self.store.delete(&ctx(), &id), expected)
            }
            StoreOp::Get { target } => {
                let id = target.resolve(&self.issued);
                let expected = self
                    .model
                    .get(&id)
                    .cloned()
                    .ok_or_else(|| StoreError::not_found(id.as_str()));
                compare("get", self.store.get(&ctx(), &id), expected)
            }
            StoreOp::GetAll => self.check_invariants(),
        }
    }

    /// Applies every operation, checking invariants after each one.
    pub fn run(&mut self, ops: &[StoreOp]) -> Result<(), String> {
        for (step, op) in ops.iter().enumerate() {
            self.apply(op)
                .and_then(|()| self.check_invariants())
                .map_err(|e| format!("step {step} ({op:?}): {e}"))?;
        }
        Ok(())
    }

    /// Checks that a full scan matches the model exactly, in id order.
    pub fn check_invariants(&self) -> Result<(), String> {
        let scanned = self
            .store
            .get_all(&ctx())
            .map_err(|e| format!("get_all failed: {e}"))?;

        if scanned.windows(2).any(|w| w[0].id >= w[1].id) {
            return Err("scan is not strictly ascending by id".to_string());
        }
        let expected: Vec<Product> = self.model.values().cloned().collect();
        if scanned != expected {
            return Err(format!(
                "scan diverged from model: store has {}, model has {}",
                scanned.len(),
                expected.len()
            ));
        }
        if self.store.len() != expected.len() {
            return Err(format!(
                "len() is {}, model has {}",
                self.store.len(),
                expected.len()
            ));
        }
        Ok(())
    }

    fn apply_add(&mut self) -> Result<(), String> {
        let id = self
            .store
            .add(&ctx())
            .map_err(|e| format!("add failed: {e}"))?;
        if self.issued.contains(&id) {
            return Err(format!("add reissued id {id}"));
        }
        let product = self
            .store
            .get(&ctx(), &id)
            .map_err(|e| format!("added product {id} not readable: {e}"))?;
        if product.id != id || product.created_at == 0 {
            return Err(format!("added product malformed: {product:?}"));
        }
        self.issued.push(id.clone());
        self.model.insert(id, product);
        Ok(())
    }

    fn apply_update(&mut self, update: &ProductUpdate) -> Result<(), String> {
        let expected = if !update.has_changes() {
            Err(StoreError::NoUpdateParams)
        } else if let Some(product) = self.model.get_mut(&update.id) {
            if update.has_name() {
                product.name.clone_from(&update.name);
            }
            if update.has_price() {
                product.price = update.price;
            }
            Ok(())
        } else {
            Err(StoreError::no_rows_updated(update.id.as_str()))
        };
        compare("update", self.store.update(&ctx(), update), expected)
    }
}

fn compare<T: PartialEq + std::fmt::Debug>(
    op: &str,
    actual: Result<T, StoreError>,
    expected: Result<T, StoreError>,
) -> Result<(), String> {
    if actual == expected {
        Ok(())
    } else {
        Err(format!("{op}: store returned {actual:?}, model expected {expected:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::TestStore;
    use crate::generators::Target;
    use prodstore_core::Backend;

    #[test]
    fn scripted_sequence_matches_model() {
        let mut checker = ModelChecker::new(TestStore::new(Backend::SortedVec).handle());
        let missing = || Target::Unknown(String::new());
        let ops = vec![
            StoreOp::Add,
            StoreOp::Add,
            StoreOp::Update {
                target: missing(),
                name: "x".into(),
                price: 0.0,
            },
            StoreOp::Delete { target: missing() },
            StoreOp::Get { target: missing() },
            StoreOp::GetAll,
        ];
        checker.run(&ops).unwrap();
        assert_eq!(checker.issued().len(), 2);
    }

    #[test]
    fn detects_foreign_mutation() {
        let store = TestStore::new(Backend::BTree).handle();
        let mut checker = ModelChecker::new(Arc::clone(&store));
        checker.apply(&StoreOp::Add).unwrap();

        let id = checker.issued()[0].clone();
        store.delete(&ctx(), &id).unwrap();
        assert!(checker.check_invariants().is_err());
    }
}
