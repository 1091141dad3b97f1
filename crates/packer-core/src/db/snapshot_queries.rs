//! Snapshot blob reads and writes.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};

use super::SNAPSHOT_KEY;
use crate::{
    error::{DatabaseResultExt, Result},
    snapshot::SnapshotStore,
};

const SELECT_BLOB_SQL: &str = "SELECT value FROM snapshots WHERE key = ?1";
const UPSERT_BLOB_SQL: &str = "INSERT INTO snapshots (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

impl super::Database {
    /// Reads the blob stored under `key`.
    pub fn read_blob(&self, key: &str) -> Result<Option<String>> {
        self.connection
            .query_row(SELECT_BLOB_SQL, params![key], |row| row.get(0))
            .optional()
            .db_context("Failed to read snapshot")
    }

    /// Replaces the blob stored under `key`.
    pub fn write_blob(&mut self, key: &str, value: &str) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            UPSERT_BLOB_SQL,
            params![key, value, Timestamp::now().to_string()],
        )
        .db_context("Failed to write snapshot")?;

        tx.commit().db_context("Failed to commit transaction")
    }
}

impl SnapshotStore for super::Database {
    fn read_snapshot(&self) -> Result<Option<String>> {
        self.read_blob(SNAPSHOT_KEY)
    }

    fn write_snapshot(&mut self, text: &str) -> Result<()> {
        self.write_blob(SNAPSHOT_KEY, text)
    }
}
