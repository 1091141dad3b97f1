//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::models::{PackingListPreview, PresetCategory};

/// Newtype wrapper for displaying collections of list previews.
///
/// # Examples
///
/// ```rust
/// use packer_core::{display::Previews, models::PackingList};
///
/// let mut list = PackingList::new("Paris Trip");
/// list.id = "p1".to_string();
///
/// let previews = Previews(vec![list.preview()]);
/// let output = previews.to_string();
/// assert!(output.contains("## Paris Trip (ID: p1)"));
/// assert_eq!(Previews(vec![]).to_string(), "No packing lists found.\n");
/// ```
pub struct Previews(pub Vec<PackingListPreview>);

impl Previews {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of previews in the collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get an iterator over the previews.
    pub fn iter(&self) -> std::slice::Iter<'_, PackingListPreview> {
        self.0.iter()
    }
}

impl Index<usize> for Previews {
    type Output = PackingListPreview;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Previews {
    type Item = &'a PackingListPreview;
    type IntoIter = std::slice::Iter<'a, PackingListPreview>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Previews {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No packing lists found.")
        } else {
            for preview in &self.0 {
                write!(f, "{preview}")?;
            }
            Ok(())
        }
    }
}

/// The preset category catalog, marking the ones selected by default.
pub struct PresetCatalog<'a>(pub &'a [PresetCategory]);

impl Default for PresetCatalog<'static> {
    fn default() -> Self {
        Self(&PresetCategory::ALL)
    }
}

impl<'a> fmt::Display for PresetCatalog<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for preset in self.0 {
            write!(f, "- `{}` {preset}", preset.id())?;
            if preset.is_default() {
                write!(f, " (default)")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
