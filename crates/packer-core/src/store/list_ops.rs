//! List operations for the ListStore.

use indexmap::{map::Values, IndexMap};
use log::{debug, warn};

use super::ListStore;
use crate::{
    error::Result,
    ids::new_id,
    models::{requests::NewList, ListFilter, PackingList, PackingListPreview},
    snapshot::{decode_snapshot, encode_snapshot, SnapshotStore},
    tree::CategoryTree,
};

impl<S: SnapshotStore> ListStore<S> {
    /// Replaces the in-memory set with the persisted snapshot and returns it.
    ///
    /// A missing, unreadable or unparsable snapshot yields an empty set. Lists
    /// stored without an identifier are given one; a repeated identifier keeps
    /// the position of its first occurrence and the content of its last.
    pub fn load_all(&mut self) -> Vec<PackingList> {
        let decoded = match self.port.read_snapshot() {
            Ok(Some(text)) => decode_snapshot(&text).unwrap_or_else(|e| {
                warn!("Discarding unparsable packing list snapshot: {e}");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Could not read packing list snapshot: {e}");
                Vec::new()
            }
        };

        self.lists = decoded
            .into_iter()
            .map(|mut list| {
                if list.id.is_empty() {
                    list.id = new_id();
                }
                (list.id.clone(), list)
            })
            .collect();

        debug!("Loaded {} packing lists", self.lists.len());
        self.lists.values().cloned().collect()
    }

    /// Inserts `list`, or replaces the stored list with the same identifier
    /// in place. A blank identifier is replaced with a fresh one.
    ///
    /// # Errors
    ///
    /// Returns the port's error when the snapshot cannot be written; the
    /// store is left unchanged.
    pub fn save(&mut self, mut list: PackingList) -> Result<PackingList> {
        if list.id.is_empty() {
            list.id = new_id();
        }

        let mut next = self.lists.clone();
        next.insert(list.id.clone(), list.clone());
        self.commit(next)?;
        Ok(list)
    }

    /// Removes the list with `id`. Removing an unknown list does nothing.
    pub fn remove(&mut self, id: &str) -> Result<Option<PackingList>> {
        if !self.lists.contains_key(id) {
            return Ok(None);
        }

        let mut next = self.lists.clone();
        let removed = next.shift_remove(id);
        self.commit(next)?;
        Ok(removed)
    }

    /// Retrieves a list by its ID.
    pub fn get(&self, id: &str) -> Option<&PackingList> {
        self.lists.get(id)
    }

    /// All lists in insertion order.
    pub fn lists(&self) -> Values<'_, String, PackingList> {
        self.lists.values()
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Builds a list from validated intake, creating one empty category per
    /// selected preset, and saves it under a fresh identifier.
    pub fn create_list(&mut self, request: NewList) -> Result<PackingList> {
        let mut list = PackingList::new(request.title)
            .with_categories(CategoryTree::from_presets(&request.categories));
        list.description = request.description;
        list.destination = request.destination;
        list.start_date = request.start_date;
        list.end_date = request.end_date;

        let list = self.save(list)?;
        debug!("Created packing list {} ({})", list.id, list.title);
        Ok(list)
    }

    /// Previews of every list in insertion order.
    pub fn previews(&self) -> Vec<PackingListPreview> {
        self.lists().map(PackingListPreview::from).collect()
    }

    /// Lists whose title or destination contains `query`, ignoring case.
    pub fn search(&self, query: &str) -> Vec<&PackingList> {
        ListFilter::new(query).apply(self.lists())
    }

    /// Writes `next` through the port and, on success, makes it current.
    pub(crate) fn commit(&mut self, next: IndexMap<String, PackingList>) -> Result<()> {
        let text = encode_snapshot(next.values())?;
        self.port.write_snapshot(&text)?;
        debug!("Persisted {} packing lists ({} bytes)", next.len(), text.len());
        self.lists = next;
        Ok(())
    }
}
