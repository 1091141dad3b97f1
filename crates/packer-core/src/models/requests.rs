//! Validated requests produced by form intake.
//!
//! Raw form fields from [`crate::params`] are normalized here: text is
//! trimmed, blanks become absent, quantities are coerced, and item names are
//! checked. The store only accepts these types, so nothing reaches it without
//! passing through intake.

use super::{list::DEFAULT_TITLE, PresetCategory};
use crate::{
    error::{PackerError, Result},
    params::{AddItem, CreateList, EditItem},
};

/// A packing list ready to be assigned an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewList {
    pub title: String,
    pub description: Option<String>,
    pub destination: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Presets to create as empty categories, in order
    pub categories: Vec<PresetCategory>,
}

impl From<&CreateList> for NewList {
    /// Normalize the creation form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use packer_core::{models::requests::NewList, params::CreateList};
    ///
    /// let form = CreateList {
    ///     title: "   ".to_string(),
    ///     destination: " Tokyo ".to_string(),
    ///     ..Default::default()
    /// };
    /// let list = NewList::from(&form);
    /// assert_eq!(list.title, "Untitled Trip");
    /// assert_eq!(list.destination.as_deref(), Some("Tokyo"));
    /// assert_eq!(list.description, None);
    /// assert_eq!(list.categories.len(), 3);
    /// ```
    fn from(form: &CreateList) -> Self {
        Self {
            title: normalize_title(&form.title),
            description: optional_text(&form.description),
            destination: optional_text(&form.destination),
            start_date: optional_text(&form.start_date),
            end_date: optional_text(&form.end_date),
            categories: form.categories.selected().to_vec(),
        }
    }
}

/// An item ready to be appended to a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub quantity: Option<u32>,
}

impl TryFrom<&AddItem> for NewItem {
    type Error = PackerError;

    /// Validate the add item dialog.
    ///
    /// # Errors
    ///
    /// * `PackerError::InvalidInput` - When the name is blank
    fn try_from(form: &AddItem) -> Result<Self> {
        Ok(Self {
            name: normalize_item_name(&form.name)?,
            quantity: parse_quantity(&form.quantity),
        })
    }
}

/// Replacement name and quantity for an existing item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemEdit {
    pub name: String,
    pub quantity: Option<u32>,
}

impl TryFrom<&EditItem> for ItemEdit {
    type Error = PackerError;

    fn try_from(form: &EditItem) -> Result<Self> {
        Ok(Self {
            name: normalize_item_name(&form.name)?,
            quantity: parse_quantity(&form.quantity),
        })
    }
}

/// Trims a title, substituting [`DEFAULT_TITLE`] for blank input.
pub fn normalize_title(raw: &str) -> String {
    optional_text(raw).unwrap_or_else(|| DEFAULT_TITLE.to_string())
}

/// Coerces a typed quantity. Blank, non-numeric and non-positive input all
/// mean "unspecified".
pub fn parse_quantity(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|q| *q > 0)
}

/// Trims an item name, rejecting blank input.
pub(crate) fn normalize_item_name(raw: &str) -> Result<String> {
    optional_text(raw).ok_or_else(|| {
        PackerError::invalid_input("name").with_reason("Item name must not be empty")
    })
}

fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
