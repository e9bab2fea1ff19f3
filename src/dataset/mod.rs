//! Record dataset displayed by the gallery.
//!
//! A dataset declares its attributes (the columns the widgets can filter
//! and sort on) and carries the records themselves. The drop-down widgets
//! derive their option lists from here, and the gallery asks
//! [`Dataset::select`] for the records matching the current instructions.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::query::{FilterInstruction, SortDirection, SortInstruction};
use crate::selector::SelectOption;

pub mod source;

pub use source::{DataSource, JsonFileSource, SourceError};

/// One column of the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub id: String,
    pub caption: String,
    #[serde(default)]
    pub filterable: bool,
    #[serde(default)]
    pub sortable: bool,
}

/// One gallery row: a value per attribute, keyed by attribute id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

impl Record {
    pub fn value(&self, attribute_id: &str) -> Option<&str> {
        self.values.get(attribute_id).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub attributes: Vec<Attribute>,
    pub records: Vec<Record>,
}

impl Dataset {
    /// Check the dataset invariants after loading: attribute ids must be
    /// unique and non-empty, and record values may only reference declared
    /// attributes.
    pub fn validate(&self) -> Result<(), SourceError> {
        let mut ids = HashSet::new();
        for attribute in &self.attributes {
            if attribute.id.is_empty() {
                return Err(SourceError::InvalidData(format!(
                    "attribute '{}' has an empty id",
                    attribute.caption
                )));
            }
            if !ids.insert(attribute.id.as_str()) {
                return Err(SourceError::InvalidData(format!(
                    "duplicate attribute id '{}'",
                    attribute.id
                )));
            }
        }
        for record in &self.records {
            for key in record.values.keys() {
                if !ids.contains(key.as_str()) {
                    return Err(SourceError::InvalidData(format!(
                        "record {} references undeclared attribute '{}'",
                        record.id, key
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn attribute(&self, id: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attribute| attribute.id == id)
    }

    /// Distinct values of one attribute, in first-appearance order, as
    /// drop-down options. Plain string data carries no separate display
    /// label, so caption and value coincide.
    pub fn filter_options(&self, attribute_id: &str) -> Vec<SelectOption> {
        let mut seen = HashSet::new();
        let mut options = Vec::new();
        for record in &self.records {
            if let Some(value) = record.value(attribute_id) {
                if !value.is_empty() && seen.insert(value.to_string()) {
                    options.push(SelectOption::new(value, value));
                }
            }
        }
        options
    }

    /// The sortable attributes as drop-down options, captioned for display
    /// and keyed by attribute id.
    pub fn sort_options(&self) -> Vec<SelectOption> {
        self.attributes
            .iter()
            .filter(|attribute| attribute.sortable)
            .map(|attribute| SelectOption::new(attribute.caption.clone(), attribute.id.clone()))
            .collect()
    }

    /// Apply the current filter and sort instructions.
    ///
    /// An absent or empty filter passes every record through. Sorting is a
    /// stable string comparison; records missing the sort attribute sort
    /// last regardless of direction.
    pub fn select(&self, filter: Option<&FilterInstruction>, sort: Option<&SortInstruction>) -> Vec<&Record> {
        let mut selected: Vec<&Record> = self
            .records
            .iter()
            .filter(|record| match filter {
                Some(instruction) if !instruction.is_empty() => instruction
                    .values
                    .iter()
                    .any(|value| record.value(&instruction.attribute_id) == Some(value.as_str())),
                _ => true,
            })
            .collect();

        if let Some(instruction) = sort {
            selected.sort_by(|a, b| {
                compare_records(
                    a.value(&instruction.attribute_id),
                    b.value(&instruction.attribute_id),
                    instruction.direction,
                )
            });
        }

        selected
    }
}

fn compare_records(a: Option<&str>, b: Option<&str>, direction: SortDirection) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match direction {
            SortDirection::Ascending => a.cmp(b),
            SortDirection::Descending => b.cmp(a),
        },
        // Missing values always go last so they never bury the data
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}
