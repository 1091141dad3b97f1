//! Data models for packing lists, categories and items.
//!
//! This module contains the domain models of the packing checklist. Display
//! implementations for these models are located in
//! [`crate::display::models`] to keep data structures separate from
//! presentation.
//!
//! ## Model Overview
//!
//! - [`PackingList`]: one trip with its metadata and [`crate::tree::CategoryTree`]
//! - [`Category`]: ordered, id-indexed items
//! - [`Item`]: a packable thing with a checked state
//! - [`PackingListPreview`]: derived overview, never persisted
//! - [`Progress`]: checked/total counts and rounded percentage
//! - [`PresetCategory`]: the fixed catalog offered at creation time
//!
//! ## Snapshot Encoding
//!
//! Models serialize to camelCase JSON. Categories and items are written as
//! ordered arrays. Decoding is tolerant: blank strings load as absent fields,
//! a blank title loads as [`DEFAULT_TITLE`], items without an id get a fresh
//! one, malformed quantities load as unspecified and a category given as a
//! bare id expands to an empty category.
//!
//! # Examples
//!
//! ```rust
//! use packer_core::models::{Category, Item, PackingList};
//! use packer_core::tree::CategoryTree;
//!
//! let list = PackingList::new("Beach Week").with_categories(
//!     CategoryTree::new().with_category(
//!         Category::new("essentials", "Essentials")
//!             .with_item(Item::new("essentials", "Passport", None).checked(true))
//!             .with_item(Item::new("essentials", "Sunscreen", Some(2))),
//!     ),
//! );
//!
//! let progress = list.progress();
//! assert_eq!(progress.checked_count, 1);
//! assert_eq!(progress.total_count, 2);
//! assert_eq!(progress.percent, 50);
//! ```

pub mod category;
pub mod filters;
pub mod item;
pub(crate) mod lenient;
pub mod list;
pub mod navigation;
pub mod preset;
pub mod preview;
pub mod progress;
pub mod requests;


pub use category::Category;
pub use filters::{filter, ListFilter};
pub use item::Item;
pub use list::{PackingList, DEFAULT_TITLE};
pub use navigation::Destination;
pub use preset::PresetCategory;
pub use preview::PackingListPreview;
pub use progress::{compute_progress, Progress};
pub use requests::{ItemEdit, NewItem, NewList};
