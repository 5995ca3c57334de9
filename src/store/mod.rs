//! File-backed item store.
//!
//! The store owns the ordered item list and rewrites the backing file in
//! full after every mutation. Persistence failures degrade locally (an
//! empty list on load, a no-op on save) with a logged warning; only an
//! out-of-range index surfaces as an error to the caller.

use crate::item::Item;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("item number {index} is out of range (inventory holds {len} items)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Per-field markers for [`Store::update`].
///
/// `None` leaves the field unchanged; `Some` overwrites it, including
/// `Some(0)` and `Some(0.0)`. An empty `name` keeps the prior value.
#[derive(Debug, Clone, Default)]
pub struct UpdateItemOptions {
    pub name: Option<String>,
    pub quantity: Option<i64>,
    pub cost: Option<f64>,
}

/// In-memory ordered collection of items, persisted to a JSON file.
///
/// Indices are 0-based; order is insertion order. The backing file is read
/// once at [`Store::open`] and rewritten after every mutating operation.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    items: Vec<Item>,
}

impl Store {
    /// Open a store backed by `path`, loading whatever the file holds.
    ///
    /// A missing file yields an empty store. An unreadable or corrupt file
    /// also yields an empty store, with a logged warning.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = load_items(&path);
        Self { path, items }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The items, in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item and persist.
    pub fn add(&mut self, item: Item) {
        debug!("Adding item '{}'", item.name);
        self.items.push(item);
        self.save();
    }

    /// Overwrite the supplied fields on the item at `index` and persist.
    ///
    /// Fields left as `None` are unchanged. An empty replacement name keeps
    /// the prior value (renaming an item to nothing is never meant).
    pub fn update(&mut self, index: usize, options: UpdateItemOptions) -> Result<(), StoreError> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })?;
        if let Some(name) = options.name {
            if !name.is_empty() {
                item.name = name;
            }
        }
        if let Some(quantity) = options.quantity {
            item.quantity = quantity;
        }
        if let Some(cost) = options.cost {
            item.cost = cost;
        }
        debug!("Updated item '{}'", item.name);
        self.save();
        Ok(())
    }

    /// Mark the item at `index` as checked and persist.
    pub fn verify(&mut self, index: usize) -> Result<(), StoreError> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })?;
        item.verified = true;
        debug!("Verified item '{}'", item.name);
        self.save();
        Ok(())
    }

    /// Remove the item at `index`, shifting later items down by one, and
    /// persist. Returns the removed item.
    pub fn delete(&mut self, index: usize) -> Result<Item, StoreError> {
        if index >= self.items.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        let removed = self.items.remove(index);
        debug!("Deleted item '{}'", removed.name);
        self.save();
        Ok(removed)
    }

    /// Rewrite the backing file from the in-memory list.
    ///
    /// Write failures are logged and swallowed; the in-memory state stays
    /// untouched and remains the source of truth for the session.
    pub fn save(&self) {
        if let Err(e) = self.try_save() {
            warn!(
                "Could not save inventory to {}: {e}",
                self.path.display()
            );
        }
    }

    fn try_save(&self) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(&self.items)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

/// Read the backing file as a JSON array of item records.
///
/// Missing file means a fresh inventory. A file that cannot be read or
/// parsed as a JSON array degrades to an empty inventory with a warning;
/// individual array elements go through the lenient [`Item::from_value`]
/// contract.
fn load_items(path: &Path) -> Vec<Item> {
    if !path.exists() {
        debug!("No inventory file at {}; starting empty", path.display());
        return Vec::new();
    }
    match try_load(path) {
        Ok(items) => {
            debug!("Loaded {} items from {}", items.len(), path.display());
            items
        }
        Err(e) => {
            warn!(
                "Could not load inventory from {}; starting empty: {e}",
                path.display()
            );
            Vec::new()
        }
    }
}

fn try_load(path: &Path) -> Result<Vec<Item>, StoreError> {
    let content = std::fs::read_to_string(path)?;
    let records: Vec<Value> = serde_json::from_str(&content)?;
    Ok(records.iter().map(Item::from_value).collect())
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
