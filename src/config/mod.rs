//! User-level configuration loaded from `~/.stockpile/config.toml`.
//!
//! The file is optional; if it does not exist all fields fall back to their
//! `Default` values. The resolved inventory path is handed to
//! [`crate::store::Store::open`] explicitly at startup, so nothing reads
//! configuration state after construction.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Default name for the inventory file, used when neither the CLI nor the
/// user config overrides it. Resolved against the working directory.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";

/// The name of the stockpile folder under the home directory.
pub const STOCKPILE_FOLDER: &str = ".stockpile";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read user config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse user config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Inventory-scoped settings (`[inventory]` table in the TOML file).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct InventoryConfig {
    /// Backing file for the item list. Relative paths resolve against the
    /// working directory.
    pub file: Option<PathBuf>,
}

/// Top-level user configuration, deserialized from `~/.stockpile/config.toml`.
///
/// All fields are optional at the TOML level; missing fields resolve to
/// their `Default` values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserConfig {
    /// Inventory-level settings (`[inventory]` section).
    #[serde(default)]
    pub inventory: InventoryConfig,
}

/// Resolve the stockpile home directory (`~/.stockpile`).
///
/// If `STOCKPILE_HOME` is set, that directory is used instead. This lets
/// tests and CI run against an isolated directory without touching the
/// user's real data.
#[must_use]
pub fn stockpile_home() -> PathBuf {
    if let Ok(home) = std::env::var("STOCKPILE_HOME") {
        return PathBuf::from(home);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(STOCKPILE_FOLDER)
}

/// Canonical path of the user config file.
///
/// Co-located with the rest of the user-scoped stockpile data (`logs/`) so
/// everything user-level lives under one directory.
#[must_use]
pub fn user_config_path() -> PathBuf {
    stockpile_home().join("config.toml")
}

/// Load the user configuration from `~/.stockpile/config.toml`.
///
/// Returns `Ok(UserConfig::default())` if the file does not exist, so
/// callers never need to handle the "absent file" case specially.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
pub fn load_user_config() -> Result<UserConfig, ConfigError> {
    let path = user_config_path();
    if !path.exists() {
        debug!(
            "User config not found at {}; using defaults",
            path.display()
        );
        return Ok(UserConfig::default());
    }
    let content = std::fs::read_to_string(&path)?;
    let config: UserConfig = toml::from_str(&content)?;
    debug!("Loaded user config from {}", path.display());
    Ok(config)
}

/// Pick the inventory file path.
///
/// Precedence: CLI flag, then the user config's `[inventory] file` entry,
/// then [`DEFAULT_INVENTORY_FILE`] in the working directory.
#[must_use]
pub fn resolve_inventory_path(cli_override: Option<&Path>, config: &UserConfig) -> PathBuf {
    if let Some(path) = cli_override {
        return path.to_path_buf();
    }
    if let Some(path) = &config.inventory.file {
        return path.clone();
    }
    PathBuf::from(DEFAULT_INVENTORY_FILE)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
