//! Common test utilities

use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Path of the inventory file inside the test directory
pub fn inventory_path(dir: &TempDir) -> PathBuf {
    dir.path().join("inventory.json")
}
