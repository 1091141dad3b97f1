//! Packing list preview types and functionality.

use serde::{Deserialize, Serialize};

use super::{PackingList, Progress};

/// Overview of a packing list for list displays.
///
/// Always derived from the authoritative [`PackingList`]; never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PackingListPreview {
    /// List ID
    pub id: String,
    /// Title of the trip
    pub title: String,
    /// Destination, if any
    pub destination: Option<String>,
    /// First day of the trip
    pub start_date: Option<String>,
    /// Last day of the trip
    pub end_date: Option<String>,
    /// Total number of items
    pub item_count: usize,
    /// Checked/total counts
    pub progress: Progress,
}

impl From<&PackingList> for PackingListPreview {
    fn from(list: &PackingList) -> Self {
        let progress = list.progress();

        Self {
            id: list.id.clone(),
            title: list.title.clone(),
            destination: list.destination.clone(),
            start_date: list.start_date.clone(),
            end_date: list.end_date.clone(),
            item_count: progress.total_count,
            progress,
        }
    }
}
