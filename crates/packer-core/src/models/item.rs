//! Item model definition and related functionality.

use serde::{Deserialize, Serialize};

use super::lenient::{positive_quantity, Keyed};
use crate::ids::new_id;

/// A single packable thing with a checked/unchecked packing state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Identifier, unique within the owning list; assigned on load when missing
    #[serde(default = "new_id")]
    pub id: String,

    /// Display name (never blank once accepted by intake)
    pub name: String,

    /// How many to pack; absent means unspecified
    #[serde(
        default,
        deserialize_with = "positive_quantity",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity: Option<u32>,

    /// Whether the item has been packed
    #[serde(default)]
    pub is_checked: bool,

    /// Identifier of the category holding this item
    #[serde(default)]
    pub category_id: String,
}

impl Item {
    /// Creates an unchecked item with a fresh identifier.
    pub fn new(category_id: impl Into<String>, name: impl Into<String>, quantity: Option<u32>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            quantity,
            is_checked: false,
            category_id: category_id.into(),
        }
    }

    /// Returns the item with its checked state set.
    pub fn checked(mut self, is_checked: bool) -> Self {
        self.is_checked = is_checked;
        self
    }

    /// Quantity worth showing next to the name. A quantity of one reads the
    /// same as an unspecified one.
    pub fn display_quantity(&self) -> Option<u32> {
        self.quantity.filter(|q| *q > 1)
    }
}

impl Keyed for Item {
    fn key(&self) -> &str {
        &self.id
    }
}
