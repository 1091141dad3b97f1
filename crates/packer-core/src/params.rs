//! Parameter structures for packer operations
//!
//! This module contains the raw intents sent by a presentation layer (CLI,
//! forms, etc.). Fields hold text exactly as entered; nothing here has been
//! validated yet. The conversions in [`crate::models::requests`] turn these
//! into entity-ready values and are the only way into the store.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │ Validated       │
//! │  (clap derives) │───▶│  (raw text)     │───▶│ Requests        │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::{
    error::{PackerError, Result},
    models::PresetCategory,
};

/// Generic parameters for operations requiring just a list ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the packing list to operate on
    pub id: String,
}

/// Raw fields of the list creation form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateList {
    /// Trip name; blank becomes "Untitled Trip"
    #[serde(default)]
    pub title: String,
    /// Optional notes about the trip
    #[serde(default)]
    pub description: String,
    /// Optional destination
    #[serde(default)]
    pub destination: String,
    /// Optional start date
    #[serde(default)]
    pub start_date: String,
    /// Optional end date
    #[serde(default)]
    pub end_date: String,
    /// Preset categories to create the list with
    #[serde(default)]
    pub categories: CategorySelection,
}

/// Multi-select state of the category picker in the creation form.
///
/// Starts with [`PresetCategory::DEFAULT_SELECTION`]. Toggling is symmetric:
/// toggling a selected category removes it, toggling an unselected one appends
/// it to the end of the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategorySelection {
    selected: Vec<PresetCategory>,
}

impl CategorySelection {
    /// A selection with nothing chosen.
    pub fn empty() -> Self {
        Self {
            selected: Vec::new(),
        }
    }

    /// Builds a selection from category ids or labels, in the given order.
    ///
    /// # Errors
    ///
    /// Returns `PackerError::InvalidInput` when an entry names no preset.
    pub fn from_ids<I, S>(ids: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut selection = Self::empty();
        for id in ids {
            let preset = parse_preset(id.as_ref())?;
            if !selection.is_selected(preset) {
                selection.selected.push(preset);
            }
        }
        Ok(selection)
    }

    /// Flips the selection state of `preset`.
    pub fn toggle(&mut self, preset: PresetCategory) {
        if let Some(position) = self.selected.iter().position(|p| *p == preset) {
            self.selected.remove(position);
        } else {
            self.selected.push(preset);
        }
    }

    /// Flips the selection state of the preset named by `id`.
    ///
    /// # Errors
    ///
    /// Returns `PackerError::InvalidInput` when `id` names no preset.
    pub fn toggle_id(&mut self, id: &str) -> Result<()> {
        let preset = parse_preset(id)?;
        self.toggle(preset);
        Ok(())
    }

    pub fn is_selected(&self, preset: PresetCategory) -> bool {
        self.selected.contains(&preset)
    }

    /// Selected presets in selection order.
    pub fn selected(&self) -> &[PresetCategory] {
        &self.selected
    }
}

impl Default for CategorySelection {
    fn default() -> Self {
        Self {
            selected: PresetCategory::DEFAULT_SELECTION.to_vec(),
        }
    }
}

fn parse_preset(id: &str) -> Result<PresetCategory> {
    id.parse::<PresetCategory>().map_err(|_| {
        PackerError::invalid_input("categories").with_reason(format!(
            "Unknown category '{id}'. Must be one of: {}",
            PresetCategory::ALL.map(|p| p.id()).join(", ")
        ))
    })
}

/// Parameters for searching lists by title or destination.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchLists {
    /// Text to look for; empty matches every list
    #[serde(default)]
    pub query: String,
}

/// Raw fields of the add item dialog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddItem {
    /// List receiving the item
    pub list_id: String,
    /// Category receiving the item
    pub category_id: String,
    /// Item name; must not be blank
    pub name: String,
    /// Quantity as typed; blank or non-numeric means unspecified
    #[serde(default)]
    pub quantity: String,
}

/// Raw fields of the edit item dialog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditItem {
    /// List holding the item
    pub list_id: String,
    /// Category holding the item
    pub category_id: String,
    /// Item to edit
    pub item_id: String,
    /// Replacement name; must not be blank
    pub name: String,
    /// Replacement quantity as typed
    #[serde(default)]
    pub quantity: String,
}

/// Address of one item, used by toggle and delete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemRef {
    /// List holding the item
    pub list_id: String,
    /// Category holding the item
    pub category_id: String,
    /// Item identifier
    pub item_id: String,
}

/// Parameters for permanently deleting a list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteList {
    /// List to delete
    pub id: String,
    /// Must be true; deletion cannot be undone
    #[serde(default)]
    pub confirmed: bool,
}
