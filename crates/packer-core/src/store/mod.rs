//! High-level store API for managing packing lists.
//!
//! This module provides the [`ListStore`], the single owner of every
//! [`PackingList`]. It coordinates intake, the category/item tree and the
//! persistence port.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │ Persistence     │
//! │   (handlers)    │───▶│ (list_ops,      │───▶│ port            │
//! │                 │    │  item_ops)      │    │ (SnapshotStore) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!     User Interface      Business Logic         Data Persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for a SQLite-backed [`ListStore`]
//! - [`handlers`]: Operations taking raw params and returning display wrappers
//! - [`list_ops`]: Loading, saving and removing whole lists
//! - [`item_ops`]: List-scoped item mutations
//!
//! Every mutation rewrites the full snapshot before it becomes visible in
//! memory. When the write fails the store keeps its previous state and the
//! error is returned to the caller.
//!
//! # Usage Examples
//!
//! ```rust
//! use packer_core::{
//!     models::requests::NewList,
//!     params::CreateList,
//!     snapshot::MemorySnapshot,
//!     store::ListStore,
//! };
//!
//! let mut store = ListStore::new(MemorySnapshot::new());
//!
//! let form = CreateList {
//!     title: "Lisbon".to_string(),
//!     ..Default::default()
//! };
//! let list = store.create_list(NewList::from(&form))?;
//!
//! assert_eq!(store.len(), 1);
//! assert_eq!(list.categories.len(), 3);
//! assert!(store.get(&list.id).is_some());
//! # packer_core::Result::<()>::Ok(())
//! ```

use indexmap::IndexMap;

use crate::{models::PackingList, snapshot::SnapshotStore};

pub mod builder;
pub mod handlers;
pub mod item_ops;
pub mod list_ops;

#[cfg(test)]
mod tests;

pub use builder::ListStoreBuilder;

/// In-memory set of packing lists backed by a persistence port.
#[derive(Debug)]
pub struct ListStore<S> {
    pub(crate) lists: IndexMap<String, PackingList>,
    pub(crate) port: S,
}

impl<S: SnapshotStore> ListStore<S> {
    /// Creates a store over `port` and loads whatever it already holds.
    pub fn new(port: S) -> Self {
        let mut store = Self {
            lists: IndexMap::new(),
            port,
        };
        store.load_all();
        store
    }
}
