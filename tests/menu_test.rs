mod common;

use common::{create_test_dir, inventory_path};
use std::io::Cursor;
use stockpile::{Item, Menu, Store};

fn run_script(store: Store, script: &str) -> (Store, String) {
    let mut output = Vec::new();
    let mut menu = Menu::new(store, Cursor::new(script.to_string()), &mut output);
    menu.run().expect("menu run should succeed");
    (
        menu.into_store(),
        String::from_utf8(output).expect("menu output should be UTF-8"),
    )
}

#[test]
fn test_full_session_through_the_menu() {
    let dir = create_test_dir();
    let path = inventory_path(&dir);

    // Add Widget, verify it, raise its cost, view, then exit.
    let script = concat!(
        "1\nWidget\n10\n2.5\n\n", // add
        "4\n1\n\n",               // verify item 1
        "3\n1\n\n\n3.0\n\n",      // update: keep name and quantity, cost 3.0
        "2\n\n",                  // view
        "6\n",                    // exit
    );
    let (store, output) = run_script(Store::open(&path), script);

    assert_eq!(store.len(), 1);
    assert_eq!(
        store.items()[0],
        Item {
            name: "Widget".to_string(),
            quantity: 10,
            cost: 3.0,
            verified: true,
        }
    );
    assert!(output.contains("Item 'Widget' added."));
    assert!(output.contains("Item 'Widget' marked as checked."));
    assert!(output.contains("Item updated."));
    assert!(output.contains("1. Name: Widget, Qty: 10, Cost: 3, Status: Checked"));

    // A fresh store over the same file sees everything the session did.
    let reopened = Store::open(&path);
    assert_eq!(reopened.items(), store.items());
}

#[test]
fn test_delete_through_the_menu_persists() {
    let dir = create_test_dir();
    let path = inventory_path(&dir);

    let mut store = Store::open(&path);
    store.add(Item::new("Widget", 10, 2.5));
    store.add(Item::new("Bolt", 3, 0.25));

    let (store, output) = run_script(store, "5\n1\n\n6\n");
    assert!(output.contains("Item 'Widget' deleted."));
    assert_eq!(store.len(), 1);
    assert_eq!(store.items()[0].name, "Bolt");

    let reopened = Store::open(&path);
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.items()[0].name, "Bolt");
}

#[test]
fn test_rejected_input_never_reaches_the_store() {
    let dir = create_test_dir();
    let path = inventory_path(&dir);

    let (store, output) = run_script(Store::open(&path), "1\nWidget\nten\n2.5\n\n6\n");
    assert!(output.contains("Invalid input. Quantity must be an integer and cost a number."));
    assert!(store.is_empty());
    // Nothing was added, so nothing was saved.
    assert!(!path.exists());
}
