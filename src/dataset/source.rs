//! Data source abstraction for loading record datasets.
//!
//! This module defines the common interface the application loads its data
//! through, along with the shipped JSON file implementation.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::Dataset;

/// Common error types for data source operations.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid dataset: {0}")]
    InvalidData(String),
}

/// Data source trait every dataset provider must implement.
///
/// Implementations are fetched once at startup and again on manual reload;
/// they validate what they hand out so the UI never sees a dataset that
/// violates the attribute invariants.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Returns the source type identifier (e.g. "json-file").
    fn source_type(&self) -> &str;

    /// A human-readable description of where the data comes from,
    /// shown in the status bar while loading fails.
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<Dataset, SourceError>;
}

/// Loads a dataset from a JSON document on disk.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DataSource for JsonFileSource {
    fn source_type(&self) -> &str {
        "json-file"
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<Dataset, SourceError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let dataset: Dataset = serde_json::from_str(&content)?;
        dataset.validate()?;
        log::info!(
            "Loaded {} records ({} attributes) from {}",
            dataset.records.len(),
            dataset.attributes.len(),
            self.path.display()
        );
        Ok(dataset)
    }
}
