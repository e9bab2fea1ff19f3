//! Filter and sort instructions derived from drop-down selections.
//!
//! The drop-down widgets report selection changes as plain value lists;
//! this module turns those lists into the instructions the gallery applies
//! to the dataset.

use serde::{Deserialize, Serialize};

/// Sort order for one attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    /// Parse a configuration value. Unknown strings are rejected rather
    /// than defaulted so a typo in the config file is caught at startup.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ascending" => Some(Self::Ascending),
            "descending" => Some(Self::Descending),
            _ => None,
        }
    }
}

/// Order records by one attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortInstruction {
    pub attribute_id: String,
    pub direction: SortDirection,
}

impl SortInstruction {
    /// Derive the instruction from a single-select sort selection.
    ///
    /// An empty selection, or the synthetic empty option, yields `None`:
    /// sorting is cleared rather than failed.
    pub fn from_values(values: &[String], direction: SortDirection) -> Option<Self> {
        let value = values.first()?;
        if value.is_empty() {
            return None;
        }
        Some(Self {
            attribute_id: value.clone(),
            direction,
        })
    }
}

/// Keep only records whose value for one attribute is among `values`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterInstruction {
    pub attribute_id: String,
    pub values: Vec<String>,
}

impl FilterInstruction {
    /// Derive the instruction from a filter selection. The synthetic empty
    /// option contributes no value, so selecting it clears the filter.
    pub fn from_values(attribute_id: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            attribute_id: attribute_id.into(),
            values: values.into_iter().filter(|value| !value.is_empty()).collect(),
        }
    }

    /// Whether the instruction restricts anything at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
