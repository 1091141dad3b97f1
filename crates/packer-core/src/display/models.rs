//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core domain
//! models, separated from the model definitions.
//!
//! The Display implementations provide:
//! - Markdown-formatted output for rich terminal display
//! - Checkbox task lists for items, with identifiers for follow-up commands

use std::fmt;

use super::datetime::{LocalDateTime, TripDates};
use crate::models::{
    Category, Destination, Item, PackingList, PackingListPreview, PresetCategory, Progress,
};

const NO_DESTINATION: &str = "No destination";

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} items packed ({}%)",
            self.checked_count, self.total_count, self.percent
        )
    }
}

impl fmt::Display for PresetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Home => write!(f, "/"),
            Destination::ListDetail(id) => write!(f, "/list/{id}"),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.is_checked { 'x' } else { ' ' };
        write!(f, "- [{mark}] {}", self.name)?;
        if let Some(quantity) = self.display_quantity() {
            write!(f, " (x{quantity})")?;
        }
        writeln!(f, " `{}`", self.id)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {} ({}/{}) `{}`",
            self.name,
            self.checked_count(),
            self.len(),
            self.id
        )?;
        writeln!(f)?;

        if self.is_empty() {
            writeln!(f, "No items in this category.")?;
        } else {
            for item in self.items() {
                write!(f, "{item}")?;
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for PackingList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- ID: {}", self.id)?;
        writeln!(
            f,
            "- Destination: {}",
            self.destination.as_deref().unwrap_or(NO_DESTINATION)
        )?;
        let dates = TripDates::new(self.start_date.as_deref(), self.end_date.as_deref());
        if dates.is_set() {
            writeln!(f, "- Dates: {dates}")?;
        }
        writeln!(f, "- Progress: {}", self.progress())?;
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        writeln!(f)?;
        if self.categories.is_empty() {
            writeln!(f, "No categories in this list.")?;
        } else {
            for category in &self.categories {
                write!(f, "{category}")?;
            }
        }

        Ok(())
    }
}

impl fmt::Display for PackingListPreview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} (ID: {})", self.title, self.id)?;
        writeln!(f)?;
        writeln!(
            f,
            "- **Destination**: {}",
            self.destination.as_deref().unwrap_or(NO_DESTINATION)
        )?;

        let dates = TripDates::new(self.start_date.as_deref(), self.end_date.as_deref());
        if dates.is_set() {
            writeln!(f, "- **Dates**: {dates}")?;
        }

        writeln!(f, "- **Progress**: {}", self.progress)?;
        writeln!(f)
    }
}
