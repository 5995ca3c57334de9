mod common;

use common::{create_test_dir, inventory_path};
use serde_json::Value;
use stockpile::{Item, Store, UpdateItemOptions};

fn read_disk_records(path: &std::path::Path) -> Vec<Value> {
    let content = std::fs::read_to_string(path).expect("inventory file should exist");
    serde_json::from_str(&content).expect("inventory file should hold a JSON array")
}

#[test]
fn test_fresh_store_on_missing_file_is_empty() {
    let dir = create_test_dir();
    let store = Store::open(inventory_path(&dir));
    assert!(store.is_empty());
}

#[test]
fn test_add_then_reopen_returns_appended_item() {
    let dir = create_test_dir();
    let path = inventory_path(&dir);

    let mut store = Store::open(&path);
    store.add(Item::new("Widget", 10, 2.5));
    store.add(Item::new("Bolt", 3, 0.25));
    drop(store);

    let mut store = Store::open(&path);
    assert_eq!(store.len(), 2);
    store.add(Item::new("Nut", 7, 0.1));

    let reopened = Store::open(&path);
    assert_eq!(reopened.len(), 3);
    assert_eq!(reopened.items()[2], Item::new("Nut", 7, 0.1));
}

#[test]
fn test_disk_format_is_array_of_four_key_records() {
    let dir = create_test_dir();
    let path = inventory_path(&dir);

    let mut store = Store::open(&path);
    store.add(Item::new("Widget", 10, 2.5));

    let records = read_disk_records(&path);
    assert_eq!(records.len(), 1);
    let record = records[0].as_object().expect("record should be an object");
    assert_eq!(record.len(), 4);
    assert_eq!(record["name"], "Widget");
    assert_eq!(record["quantity"], 10);
    assert_eq!(record["cost"], 2.5);
    assert_eq!(record["verified"], false);
}

#[test]
fn test_partial_records_on_disk_load_with_defaults() {
    let dir = create_test_dir();
    let path = inventory_path(&dir);
    std::fs::write(
        &path,
        r#"[{"name": "Sparse"}, {"quantity": 9, "verified": true}]"#,
    )
    .expect("write seed file");

    let store = Store::open(&path);
    assert_eq!(store.len(), 2);
    assert_eq!(store.items()[0], Item::new("Sparse", 0, 0.0));
    assert_eq!(
        store.items()[1],
        Item {
            name: String::new(),
            quantity: 9,
            cost: 0.0,
            verified: true,
        }
    );
}

#[test]
fn test_corrupt_file_recovers_and_next_save_overwrites_it() {
    let dir = create_test_dir();
    let path = inventory_path(&dir);
    std::fs::write(&path, "garbage").expect("write corrupt file");

    let mut store = Store::open(&path);
    assert!(store.is_empty());

    store.add(Item::new("Fresh", 1, 1.0));
    let records = read_disk_records(&path);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["name"], "Fresh");
}

#[test]
fn test_widget_lifecycle_disk_matches_memory_after_every_step() {
    let dir = create_test_dir();
    let path = inventory_path(&dir);

    let mut store = Store::open(&path);

    store.add(Item::new("Widget", 10, 2.5));
    assert_eq!(Store::open(&path).items(), store.items());

    store.verify(0).expect("verify should succeed");
    assert!(store.items()[0].verified);
    assert_eq!(Store::open(&path).items(), store.items());

    store
        .update(
            0,
            UpdateItemOptions {
                cost: Some(3.0),
                ..Default::default()
            },
        )
        .expect("update should succeed");
    assert_eq!(
        store.items()[0],
        Item {
            name: "Widget".to_string(),
            quantity: 10,
            cost: 3.0,
            verified: true,
        }
    );
    assert_eq!(Store::open(&path).items(), store.items());

    store.delete(0).expect("delete should succeed");
    assert!(store.is_empty());
    assert!(Store::open(&path).is_empty());
    assert!(read_disk_records(&path).is_empty());
}

#[test]
fn test_negative_quantity_round_trips() {
    let dir = create_test_dir();
    let path = inventory_path(&dir);

    let mut store = Store::open(&path);
    store.add(Item::new("Backordered", -5, 4.0));

    let reopened = Store::open(&path);
    assert_eq!(reopened.items()[0].quantity, -5);
}
