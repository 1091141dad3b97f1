//! The per-list category/item tree.
//!
//! A [`CategoryTree`] is an ordered, identity-indexed collection of
//! [`Category`] values, each holding its own ordered, identity-indexed items.
//! Lookups by identifier are O(1) and iteration follows insertion order.
//!
//! Mutations never touch the receiver. Each operation in [`item_ops`] rebuilds
//! and returns a new tree, which lets callers keep the previous tree around
//! for undo or for cheap change detection:
//!
//! ```rust
//! use packer_core::{models::PresetCategory, tree::CategoryTree};
//!
//! let tree = CategoryTree::from_presets(&PresetCategory::DEFAULT_SELECTION);
//! let (added, item) = tree.add_item("essentials", "Passport", None)?;
//! let toggled = added.toggle_item("essentials", &item.id);
//!
//! assert_eq!(tree.item_count(), 0);
//! assert_eq!(toggled.progress().checked_count, 1);
//! # packer_core::Result::<()>::Ok(())
//! ```

use indexmap::{map::Values, IndexMap};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::{compute_progress, Category, Item, PresetCategory, Progress};

pub mod item_ops;


/// Ordered categories of one packing list, indexed by category id.
#[derive(Debug, Clone, Default)]
pub struct CategoryTree {
    categories: IndexMap<String, Category>,
}

impl CategoryTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tree holding one empty category per preset, in the given
    /// order. Repeated presets collapse to one category.
    pub fn from_presets(presets: &[PresetCategory]) -> Self {
        presets.iter().copied().map(Category::from).collect()
    }

    /// Returns the tree with `category` appended, or replacing the category
    /// with the same id in place.
    pub fn with_category(mut self, mut category: Category) -> Self {
        category.rehome_items();
        self.categories.insert(category.id.clone(), category);
        self
    }

    /// Looks up a category by identifier.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.get(id)
    }

    /// Categories in insertion order.
    pub fn categories(&self) -> Values<'_, String, Category> {
        self.categories.values()
    }

    /// Finds an item anywhere in the tree.
    pub fn find_item(&self, item_id: &str) -> Option<&Item> {
        self.categories().find_map(|category| category.item(item_id))
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of items across all categories.
    pub fn item_count(&self) -> usize {
        self.categories().map(Category::len).sum()
    }

    /// Packing progress over the whole tree.
    pub fn progress(&self) -> Progress {
        compute_progress(self.categories())
    }
}

impl PartialEq for CategoryTree {
    fn eq(&self, other: &Self) -> bool {
        self.categories().eq(other.categories())
    }
}

impl Eq for CategoryTree {}

impl FromIterator<Category> for CategoryTree {
    fn from_iter<T: IntoIterator<Item = Category>>(iter: T) -> Self {
        iter.into_iter()
            .fold(CategoryTree::new(), CategoryTree::with_category)
    }
}

impl<'a> IntoIterator for &'a CategoryTree {
    type Item = &'a Category;
    type IntoIter = Values<'a, String, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories()
    }
}

impl Serialize for CategoryTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.categories())
    }
}

/// A category as it may appear in a snapshot: either fully expanded or as the
/// bare id chosen in the creation form.
#[derive(Deserialize)]
#[serde(untagged)]
enum CategoryEntry {
    Id(String),
    Full(Category),
}

impl From<CategoryEntry> for Category {
    fn from(entry: CategoryEntry) -> Self {
        match entry {
            CategoryEntry::Full(category) => category,
            CategoryEntry::Id(id) => match PresetCategory::from_id(&id) {
                Some(preset) => preset.into(),
                None => Category::new(id.clone(), id),
            },
        }
    }
}

impl<'de> Deserialize<'de> for CategoryTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<CategoryEntry>::deserialize(deserializer)?;
        Ok(entries.into_iter().map(Category::from).collect())
    }
}
