//! Category model definition and related functionality.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{
    lenient::{deserialize_seq, serialize_seq, Keyed},
    Item, PresetCategory,
};

/// A named grouping of items within a packing list.
///
/// Items are kept in insertion order and indexed by their identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Identifier, unique within the owning list
    pub id: String,

    /// Display name
    #[serde(alias = "label")]
    pub name: String,

    #[serde(
        default,
        serialize_with = "serialize_seq",
        deserialize_with = "deserialize_seq"
    )]
    pub(crate) items: IndexMap<String, Item>,
}

impl Category {
    /// Creates an empty category.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            items: IndexMap::new(),
        }
    }

    /// Appends an item, re-homing it to this category.
    pub fn with_item(mut self, mut item: Item) -> Self {
        item.category_id = self.id.clone();
        self.items.insert(item.id.clone(), item);
        self
    }

    /// Looks up an item by identifier.
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    /// Items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Number of items in the category.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of checked items in the category.
    pub fn checked_count(&self) -> usize {
        self.items.values().filter(|item| item.is_checked).count()
    }

    /// Points every item's `category_id` back at this category.
    pub(crate) fn rehome_items(&mut self) {
        for item in self.items.values_mut() {
            if item.category_id != self.id {
                item.category_id.clone_from(&self.id);
            }
        }
    }
}

// Item order is significant, unlike `IndexMap`'s own equality.
impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.name == other.name && self.items().eq(other.items())
    }
}

impl Eq for Category {}

impl From<PresetCategory> for Category {
    fn from(preset: PresetCategory) -> Self {
        Category::new(preset.id(), preset.label())
    }
}

impl Keyed for Category {
    fn key(&self) -> &str {
        &self.id
    }
}
