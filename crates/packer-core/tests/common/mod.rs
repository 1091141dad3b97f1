use std::path::{Path, PathBuf};

use packer_core::{Database, ListStore, ListStoreBuilder};
use tempfile::TempDir;

/// Helper function to create a store over a fresh database file
pub fn create_test_store() -> (TempDir, PathBuf, ListStore<Database>) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let store = open_store(&db_path);
    (temp_dir, db_path, store)
}

/// Helper function to open another store on an existing database file
pub fn open_store(db_path: &Path) -> ListStore<Database> {
    ListStoreBuilder::new()
        .with_database_path(Some(db_path))
        .build()
        .expect("Failed to create store")
}
