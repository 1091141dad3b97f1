//! Logical navigation targets handed to the presentation layer.

use super::PackingList;

/// Where the presentation layer should go after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// The overview of all packing lists
    Home,
    /// The detail view of one packing list
    ListDetail(String),
}

impl Destination {
    /// Target after a list was created.
    pub fn after_create(list: &PackingList) -> Self {
        Destination::ListDetail(list.id.clone())
    }
}
