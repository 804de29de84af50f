//! CRUD contract tests, run against every backend.

use prodstore_core::{Backend, Context, ProductUpdate, StoreError};
use prodstore_testkit::prelude::*;
use proptest::prelude::*;
use std::collections::HashSet;

#[test]
fn add_returns_distinct_ids() {
    for_each_backend(|store| {
        let ids: HashSet<String> = (0..500).map(|_| store.add(&ctx()).unwrap()).collect();
        assert_eq!(ids.len(), 500, "backend {}", store.backend);
    });
}

#[test]
fn added_product_round_trips() {
    for_each_backend(|store| {
        let id = store.add(&ctx()).unwrap();
        let created = store.get(&ctx(), &id).unwrap();
        assert_eq!(created.id, id);
        assert!(created.created_at > 0);
        assert!(!created.name.is_empty());

        store
            .update(&ctx(), &ProductUpdate::new(&id).with_name("Renamed").with_price(3.5))
            .unwrap();
        let updated = store.get(&ctx(), &id).unwrap();
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.price, 3.5);
    });
}

#[test]
fn get_all_is_sorted_regardless_of_insert_order() {
    for_each_backend(|store| {
        for _ in 0..200 {
            store.add(&ctx()).unwrap();
        }
        let all = store.get_all(&ctx()).unwrap();
        assert_eq!(all.len(), 200);
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));
    });
}

#[test]
fn partial_update_touches_only_supplied_fields() {
    for_each_backend(|store| {
        let id = store.add(&ctx()).unwrap();
        store
            .update(&ctx(), &ProductUpdate::new(&id).with_name("A").with_price(1.0))
            .unwrap();

        store
            .update(&ctx(), &ProductUpdate::new(&id).with_price(2.0))
            .unwrap();
        let product = store.get(&ctx(), &id).unwrap();
        assert_eq!(product.name, "A");
        assert_eq!(product.price, 2.0);

        let before = store.get_all(&ctx()).unwrap();
        assert_eq!(
            store.update(&ctx(), &ProductUpdate::new(&id)),
            Err(StoreError::NoUpdateParams)
        );
        assert_eq!(store.get_all(&ctx()).unwrap(), before);
    });
}

#[test]
fn absent_ids_leave_state_unchanged() {
    for_each_backend(|store| {
        let kept = store.add(&ctx()).unwrap();
        let gone = store.add(&ctx()).unwrap();
        store.delete(&ctx(), &gone).unwrap();
        let before = store.get_all(&ctx()).unwrap();

        for id in ["never-inserted", gone.as_str()] {
            assert!(matches!(
                store.update(&ctx(), &ProductUpdate::new(id).with_name("x")),
                Err(StoreError::NoRowsUpdated { .. })
            ));
            assert!(matches!(
                store.delete(&ctx(), id),
                Err(StoreError::NoRowsDeleted { .. })
            ));
            assert!(matches!(
                store.get(&ctx(), id),
                Err(StoreError::NotFound { .. })
            ));
        }

        assert_eq!(store.get_all(&ctx()).unwrap(), before);
        assert_eq!(before[0].id, kept);
    });
}

#[test]
fn no_update_params_wins_over_absence() {
    for_each_backend(|store| {
        assert_eq!(
            store.update(&ctx(), &ProductUpdate::new("nope")),
            Err(StoreError::NoUpdateParams)
        );
    });
}

#[test]
fn empty_store_scans_to_empty_vec() {
    for_each_backend(|store| {
        let all = store.get_all(&ctx()).unwrap();
        assert!(all.is_empty());
        assert!(store.is_empty());
    });
}

#[test]
fn end_to_end_scenario() {
    for_each_backend(|store| {
        let p1 = store.add(&ctx()).unwrap();
        let original = store.get(&ctx(), &p1).unwrap();

        store
            .update(&ctx(), &ProductUpdate::new(&p1).with_name("Widget"))
            .unwrap();
        let product = store.get(&ctx(), &p1).unwrap();
        assert_eq!(product.name, "Widget");
        assert_eq!(product.price, original.price);

        store
            .update(&ctx(), &ProductUpdate::new(&p1).with_price(9.99))
            .unwrap();
        let product = store.get(&ctx(), &p1).unwrap();
        assert_eq!(product.price, 9.99);
        assert_eq!(product.name, "Widget");

        store.delete(&ctx(), &p1).unwrap();
        assert_eq!(store.get(&ctx(), &p1), Err(StoreError::not_found(&p1)));
        assert_eq!(
            store.delete(&ctx(), &p1),
            Err(StoreError::no_rows_deleted(&p1))
        );
    });
}

#[test]
fn wire_parsed_updates_apply() {
    for_each_backend(|store| {
        let id = store.add(&ctx()).unwrap();
        let update = ProductUpdate::parse(&id, "", "12.25").unwrap();
        store.update(&ctx(), &update).unwrap();
        assert_eq!(store.get(&ctx(), &id).unwrap().price, 12.25);

        assert_eq!(
            ProductUpdate::parse(&id, "", "not-a-number"),
            Err(StoreError::NoUpdateParams)
        );
    });
}

#[test]
fn cancelled_context_does_not_mutate() {
    for_each_backend(|store| {
        let id = store.add(&ctx()).unwrap();
        let cancelled = Context::background();
        cancelled.cancel();

        assert_eq!(store.add(&cancelled), Err(StoreError::Cancelled));
        assert_eq!(
            store.update(&cancelled, &ProductUpdate::new(&id).with_name("x")),
            Err(StoreError::Cancelled)
        );
        assert_eq!(store.delete(&cancelled, &id), Err(StoreError::Cancelled));
        assert_eq!(store.get(&cancelled, &id), Err(StoreError::Cancelled));
        assert_eq!(store.len(), 1);
        assert_ne!(store.get(&ctx(), &id).unwrap().name, "x");
    });
}

#[test]
fn product_json_shape() {
    let store = TestStore::new(Backend::SortedVec);
    let id = store.add(&ctx()).unwrap();
    let json = serde_json::to_value(store.get(&ctx(), &id).unwrap()).unwrap();
    let object = json.as_object().unwrap();
    for key in ["id", "name", "price", "created_at"] {
        assert!(object.contains_key(key), "missing {key}");
    }
}

proptest! {
    #![proptest_config(PropTestConfig::default().to_proptest_config())]

    #[test]
    fn sorted_vec_matches_model(ops in op_sequence_strategy(PropTestConfig::default().max_ops)) {
        let mut checker = ModelChecker::new(TestStore::new(Backend::SortedVec).handle());
        if let Err(e) = checker.run(&ops) {
            prop_assert!(false, "{}", e);
        }
    }

    #[test]
    fn btree_matches_model(ops in op_sequence_strategy(PropTestConfig::default().max_ops)) {
        let mut checker = ModelChecker::new(TestStore::new(Backend::BTree).handle());
        if let Err(e) = checker.run(&ops) {
            prop_assert!(false, "{}", e);
        }
    }
}
