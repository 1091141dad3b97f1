//! Core library for the Packer travel checklist application.
//!
//! This crate provides the packing list state model: lists scoped to a trip,
//! categories of items, packing progress, search, form intake and snapshot
//! persistence.
//!
//! # Layers
//!
//! - **Intake** ([`params`], [`models::requests`]): raw form fields in,
//!   validated requests out
//! - **Store** ([`store`]): owns every list and persists through a
//!   [`snapshot::SnapshotStore`] port
//! - **Tree** ([`tree`]): the per-list category/item structure and its
//!   rebuild-style mutations
//! - **Display** ([`display`]): markdown rendering of lists, previews and
//!   operation results
//!
//! # Quick Start
//!
//! ```rust
//! use packer_core::{
//!     params::{AddItem, CreateList, ItemRef, SearchLists},
//!     MemorySnapshot, ListStore,
//! };
//!
//! let mut store = ListStore::new(MemorySnapshot::new());
//!
//! let list = store
//!     .create_list_result(&CreateList {
//!         title: "Paris Trip".to_string(),
//!         ..Default::default()
//!     })?
//!     .resource;
//!
//! let item = store
//!     .add_item_result(&AddItem {
//!         list_id: list.id.clone(),
//!         category_id: "essentials".to_string(),
//!         name: "Passport".to_string(),
//!         quantity: String::new(),
//!     })?
//!     .resource;
//!
//! store.toggle_item_result(&ItemRef {
//!     list_id: list.id.clone(),
//!     category_id: "essentials".to_string(),
//!     item_id: item.id,
//! })?;
//!
//! let previews = store.list_previews(&SearchLists {
//!     query: "paris".to_string(),
//! });
//! assert_eq!(previews[0].progress.percent, 100);
//! # packer_core::Result::<()>::Ok(())
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod ids;
pub mod models;
pub mod params;
pub mod snapshot;
pub mod store;
pub mod tree;

// Re-export commonly used types
pub use db::Database;
pub use display::{CreateResult, DeleteResult, OperationStatus, Previews, UpdateResult};
pub use error::{PackerError, Result};
pub use models::{
    Category, Destination, Item, PackingList, PackingListPreview, PresetCategory, Progress,
};
pub use params::{AddItem, CreateList, DeleteList, EditItem, Id, ItemRef, SearchLists};
pub use snapshot::{MemorySnapshot, SnapshotStore};
pub use store::{ListStore, ListStoreBuilder};
pub use tree::CategoryTree;
