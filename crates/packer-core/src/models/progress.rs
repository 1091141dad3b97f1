//! Packing progress derived from a list's items.

use serde::{Deserialize, Serialize};

use super::Category;

/// Checked and total item counts with the rounded completion percentage.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Progress {
    /// Number of checked items
    pub checked_count: usize,
    /// Number of items across all categories
    pub total_count: usize,
    /// Completion percentage in `0..=100`
    pub percent: u8,
}

impl Progress {
    /// Builds progress from raw counts.
    ///
    /// The percentage is `round(checked / total * 100)` with halves rounded
    /// up, and zero when there are no items.
    pub fn from_counts(checked_count: usize, total_count: usize) -> Self {
        let percent = if total_count > 0 {
            let ratio = checked_count.min(total_count) as f64 / total_count as f64;
            (ratio * 100.0).round() as u8
        } else {
            0
        };

        Self {
            checked_count,
            total_count,
            percent,
        }
    }

    /// Items still to pack.
    pub fn remaining(&self) -> usize {
        self.total_count.saturating_sub(self.checked_count)
    }

    /// True when at least one item exists and every item is checked.
    pub fn is_complete(&self) -> bool {
        self.total_count > 0 && self.checked_count >= self.total_count
    }
}

/// Sums checked and total items over `categories`.
pub fn compute_progress<'a, I>(categories: I) -> Progress
where
    I: IntoIterator<Item = &'a Category>,
{
    let (checked, total) = categories
        .into_iter()
        .fold((0, 0), |(checked, total), category| {
            (checked + category.checked_count(), total + category.len())
        });
    Progress::from_counts(checked, total)
}
