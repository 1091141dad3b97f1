//! Persistence port for the packing list snapshot.
//!
//! All lists are persisted together as one serialized blob. The store only
//! talks to persistence through [`SnapshotStore`], so any key/value backend
//! can sit behind it. Two adapters ship with the crate: the SQLite-backed
//! [`crate::db::Database`] and the in-memory [`MemorySnapshot`].

use log::warn;
use serde_json::Value;

use crate::{error::Result, models::PackingList};

/// A place to read and write the serialized list snapshot.
pub trait SnapshotStore {
    /// Returns the stored snapshot text, or `None` when nothing was written yet.
    fn read_snapshot(&self) -> Result<Option<String>>;

    /// Replaces the stored snapshot text.
    fn write_snapshot(&mut self, text: &str) -> Result<()>;
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for Box<S> {
    fn read_snapshot(&self) -> Result<Option<String>> {
        (**self).read_snapshot()
    }

    fn write_snapshot(&mut self, text: &str) -> Result<()> {
        (**self).write_snapshot(text)
    }
}

/// Snapshot held in process memory. Used by tests and throwaway stores.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshot {
    blob: Option<String>,
}

impl MemorySnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `blob` already stored.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
        }
    }

    /// The currently stored text.
    pub fn blob(&self) -> Option<&str> {
        self.blob.as_deref()
    }
}

impl SnapshotStore for MemorySnapshot {
    fn read_snapshot(&self) -> Result<Option<String>> {
        Ok(self.blob.clone())
    }

    fn write_snapshot(&mut self, text: &str) -> Result<()> {
        self.blob = Some(text.to_string());
        Ok(())
    }
}

/// Serializes lists in order as a JSON array.
pub fn encode_snapshot<'a, I>(lists: I) -> Result<String>
where
    I: IntoIterator<Item = &'a PackingList>,
{
    let lists: Vec<&PackingList> = lists.into_iter().collect();
    Ok(serde_json::to_string(&lists)?)
}

/// Parses a snapshot written by [`encode_snapshot`] or by older clients.
///
/// Each list is decoded on its own. A list that cannot be decoded is logged
/// and skipped so the rest survive the next write.
///
/// # Errors
///
/// Fails when the text is not a JSON array.
pub fn decode_snapshot(text: &str) -> Result<Vec<PackingList>> {
    let entries: Vec<Value> = serde_json::from_str(text)?;
    Ok(entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(list) => Some(list),
            Err(e) => {
                warn!("Skipping undecodable packing list at position {index}: {e}");
                None
            }
        })
        .collect())
}
