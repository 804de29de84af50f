//! Concurrent access tests.

use prodstore_core::{Backend, ProductUpdate};
use prodstore_testkit::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

#[test]
fn hundred_concurrent_adds() {
    for backend in Backend::ALL {
        let store = TestStore::new(backend);
        let handles: Vec<_> = (0..100)
            .map(|_| {
                let store = store.handle();
                thread::spawn(move || store.add(&ctx()).unwrap())
            })
            .collect();
        let ids: HashSet<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        assert_eq!(ids.len(), 100);
        let all = store.get_all(&ctx()).unwrap();
        assert_eq!(all.len(), 100);
        assert!(all.iter().all(|p| ids.contains(&p.id)));
        assert_eq!(verify_integrity(store.store.as_ref()).unwrap(), 100);
    }
}

#[test]
fn stress_adds_every_backend() {
    let config = StressConfig {
        operations: 250,
        threads: 8,
    };
    for backend in Backend::ALL {
        let store = TestStore::new(backend);
        let (result, ids) = stress_concurrent_adds(store.handle(), &config);
        println!("concurrent adds [{backend}]: {result}");
        assert_eq!(result.failed_ops, 0);
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), 2_000);
        assert_eq!(verify_integrity(store.store.as_ref()).unwrap(), 2_000);
    }
}

#[test]
fn scanners_never_see_partial_writes() {
    let config = StressConfig::default();
    for backend in Backend::ALL {
        let store = TestStore::new(backend);
        let result = stress_mixed_operations(store.handle(), &config);
        println!("mixed operations [{backend}]: {result}");
        assert_eq!(result.failed_ops, 0, "backend {backend}");
        assert!(verify_integrity(store.store.as_ref()).is_ok());
    }
}

#[test]
fn concurrent_updates_to_one_product_are_whole() {
    let store = TestStore::new(Backend::SortedVec);
    let id = Arc::new(store.add(&ctx()).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let store = store.handle();
            let id = Arc::clone(&id);
            thread::spawn(move || {
                for i in 0..100 {
                    let tag = format!("t{t}-{i}");
                    let update = ProductUpdate::new(id.as_str())
                        .with_name(tag)
                        .with_price(f64::from(t * 1000 + i + 1));
                    store.update(&ctx(), &update).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let product = store.get(&ctx(), &id).unwrap();
    let (t, i) = product
        .name
        .trim_start_matches('t')
        .split_once('-')
        .map(|(t, i)| (t.parse::<u32>().unwrap(), i.parse::<u32>().unwrap()))
        .unwrap();
    assert_eq!(product.price, f64::from(t * 1000 + i + 1));
}
