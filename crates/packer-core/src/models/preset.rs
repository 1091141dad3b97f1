//! The fixed catalog of predefined categories.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the predefined categories offered when a list is
/// created.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PresetCategory {
    /// Passport, wallet, chargers
    Essentials,
    Clothing,
    Toiletries,
    Electronics,
    Documents,
    Medications,
    Accessories,
    /// Anything that fits nowhere else
    Misc,
}

impl PresetCategory {
    /// Every preset, in catalog order.
    pub const ALL: [PresetCategory; 8] = [
        PresetCategory::Essentials,
        PresetCategory::Clothing,
        PresetCategory::Toiletries,
        PresetCategory::Electronics,
        PresetCategory::Documents,
        PresetCategory::Medications,
        PresetCategory::Accessories,
        PresetCategory::Misc,
    ];

    /// Presets selected before the user touches the category picker.
    pub const DEFAULT_SELECTION: [PresetCategory; 3] = [
        PresetCategory::Essentials,
        PresetCategory::Clothing,
        PresetCategory::Toiletries,
    ];

    /// Stable identifier used as the category id inside a list.
    pub fn id(&self) -> &'static str {
        match self {
            PresetCategory::Essentials => "essentials",
            PresetCategory::Clothing => "clothing",
            PresetCategory::Toiletries => "toiletries",
            PresetCategory::Electronics => "electronics",
            PresetCategory::Documents => "documents",
            PresetCategory::Medications => "medications",
            PresetCategory::Accessories => "accessories",
            PresetCategory::Misc => "misc",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            PresetCategory::Essentials => "Essentials",
            PresetCategory::Clothing => "Clothing",
            PresetCategory::Toiletries => "Toiletries",
            PresetCategory::Electronics => "Electronics",
            PresetCategory::Documents => "Documents",
            PresetCategory::Medications => "Medications",
            PresetCategory::Accessories => "Accessories",
            PresetCategory::Misc => "Miscellaneous",
        }
    }

    /// Whether the preset is part of [`Self::DEFAULT_SELECTION`].
    pub fn is_default(&self) -> bool {
        Self::DEFAULT_SELECTION.contains(self)
    }

    /// Looks up the preset whose id matches `id` exactly.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.id() == id)
    }
}

impl FromStr for PresetCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|preset| preset.id() == wanted || preset.label().to_lowercase() == wanted)
            .ok_or_else(|| format!("Invalid category: {s}"))
    }
}
