//! stockpile — a local-first inventory tracker.
//!
//! The crate keeps an ordered list of named items (quantity, unit cost,
//! verification flag), persists the list to a local JSON file, and exposes
//! add/view/update/verify/delete operations through an interactive terminal
//! menu.
//!
//! Modules:
//! - [`item`] — the inventory record and its serialization contract
//! - [`store`] — the file-backed ordered store with CRUD operations
//! - [`config`] — user-level configuration and path resolution
//! - [`logging`] — tracing subscriber setup (file-rotated logs)
//! - [`menu`] — the interactive terminal menu driving the store

#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp
    )
)]

pub mod config;
pub mod item;
pub mod logging;
pub mod menu;
pub mod store;

// Re-export commonly used types
pub use config::{
    load_user_config, resolve_inventory_path, ConfigError, UserConfig, DEFAULT_INVENTORY_FILE,
};
pub use item::Item;
pub use logging::{init_logging, parse_rotation, LogConfig};
pub use menu::Menu;
pub use store::{Store, StoreError, UpdateItemOptions};
