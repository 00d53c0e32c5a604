//! Compatibility tests for reading snapshots written by other tooling:
//! records with missing optional fields must load with defaults, and
//! partially damaged snapshots must keep their valid records.

use shelfview_store::{CollectionStore, KvStore};
use shelfview_types::Priority;

#[test]
fn loads_minimal_records_with_defaults() {
    let kv = KvStore::open_in_memory().unwrap();
    kv.set(
        "todos",
        r#"[
            {"id":"9f1b2c3d-0000-4000-8000-000000000001","name":"Buy milk"},
            {"id":"9f1b2c3d-0000-4000-8000-000000000002","name":"Call bank","completed":true}
        ]"#,
    )
    .unwrap();

    let store = CollectionStore::load(kv, "todos").unwrap();
    assert_eq!(store.len(), 2);

    let first = &store.all()[0];
    assert_eq!(first.name, "Buy milk");
    assert!(!first.completed);
    assert!(first.in_stock);
    assert_eq!(first.priority, Priority::Low);
    assert!(first.category.is_none());

    let second = &store.all()[1];
    assert!(second.completed);
}

#[test]
fn keeps_valid_records_when_some_are_damaged() {
    let kv = KvStore::open_in_memory().unwrap();
    kv.set(
        "products",
        r#"[
            {"id":"9f1b2c3d-0000-4000-8000-000000000001","name":"Headphones","price":199.99},
            {"name": 12},
            "not even an object",
            {"id":"9f1b2c3d-0000-4000-8000-000000000002","name":"T-Shirt","price":29.99}
        ]"#,
    )
    .unwrap();

    let store = CollectionStore::load(kv, "products").unwrap();
    let report = store.load_report();

    assert_eq!(store.len(), 2);
    assert_eq!(report.loaded, 2);
    assert_eq!(report.skipped, 2);
    assert!(!report.malformed);

    let names: Vec<&str> = store.all().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Headphones", "T-Shirt"]);
}

#[test]
fn whole_snapshot_damage_degrades_to_empty_not_fatal() {
    let kv = KvStore::open_in_memory().unwrap();
    kv.set("todos", r#"{"version":2,"items":[]}"#).unwrap();

    let store = CollectionStore::load(kv, "todos").unwrap();
    assert!(store.is_empty());
    assert!(store.load_report().malformed);
}
