//! Packing list model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Deserializer, Serialize};

use super::{lenient::blank_as_none, PackingListPreview, Progress};
use crate::tree::CategoryTree;

/// Title given to lists created without one.
pub const DEFAULT_TITLE: &str = "Untitled Trip";

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

/// Decodes a title, falling back to [`DEFAULT_TITLE`] when it is blank.
fn title_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(blank_as_none(deserializer)?.unwrap_or_else(default_title))
}

/// A named, date-scoped collection of categories and items for one trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackingList {
    /// Unique identifier; blank until the store assigns one
    #[serde(default)]
    pub id: String,

    /// Title of the trip
    #[serde(default = "default_title", deserialize_with = "title_or_default")]
    pub title: String,

    /// Free-form notes about the trip
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,

    /// Where the trip goes
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub destination: Option<String>,

    /// First day of the trip, as entered (usually `YYYY-MM-DD`)
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<String>,

    /// Last day of the trip, as entered
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_date: Option<String>,

    /// Categories and their items
    #[serde(default)]
    pub categories: CategoryTree,

    /// Timestamp when the list was created (UTC)
    #[serde(default = "Timestamp::now")]
    pub created_at: Timestamp,

    /// Timestamp when the list was last modified (UTC)
    #[serde(default = "Timestamp::now")]
    pub updated_at: Timestamp,
}

impl PackingList {
    /// Creates an unsaved list with the default title and no categories.
    pub fn new(title: impl Into<String>) -> Self {
        let now = Timestamp::now();
        Self {
            id: String::new(),
            title: title.into(),
            description: None,
            destination: None,
            start_date: None,
            end_date: None,
            categories: CategoryTree::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns the list with its category tree replaced.
    pub fn with_categories(mut self, categories: CategoryTree) -> Self {
        self.categories = categories;
        self
    }

    /// Total number of items across all categories.
    pub fn item_count(&self) -> usize {
        self.categories.item_count()
    }

    /// Packing progress of the list.
    pub fn progress(&self) -> Progress {
        self.categories.progress()
    }

    /// Read-only projection used by list overviews.
    pub fn preview(&self) -> PackingListPreview {
        PackingListPreview::from(self)
    }

    /// Marks the list as modified now.
    pub(crate) fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}

impl Default for PackingList {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE)
    }
}
