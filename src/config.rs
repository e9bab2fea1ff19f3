//! Configuration management for Gallerist
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{
    CONFIG_GENERATED, DEFAULT_EMPTY_OPTION_CAPTION, DEFAULT_EMPTY_PLACEHOLDER, GALLERY_MAX_COLUMNS,
    GALLERY_MIN_COLUMNS, HEADER_DEFAULT_HEIGHT, HEADER_MAX_HEIGHT, HEADER_MIN_HEIGHT,
};
use crate::query::SortDirection;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub data: DataConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Height of the filter/sort header row in lines
    pub header_height: u16,
    /// Whether the filter drop-down allows multiple selections
    pub filter_multi_select: bool,
    /// Caption shown when a drop-down has no meaningful selection
    pub empty_option_caption: String,
}

/// Data configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the dataset JSON file
    pub path: String,
    /// Attribute the filter drop-down offers values of
    pub filter_attribute: String,
    /// Initial filter selection: a single value, or comma-separated values
    /// when the filter is multi-select
    pub default_filter: String,
    /// Attribute id the gallery is initially sorted by (empty = unsorted)
    pub default_sort: String,
    /// Initial sort direction: "ascending" or "descending"
    pub default_sort_direction: String,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Number of attribute columns the gallery renders per record
    pub gallery_columns: u16,
    /// Message shown when filtering leaves no records
    pub empty_placeholder: String,
    /// Show record ids in the gallery
    pub show_record_ids: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable logging
    pub enabled: bool,
    /// Log file path
    pub file: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            header_height: HEADER_DEFAULT_HEIGHT,
            filter_multi_select: true,
            empty_option_caption: DEFAULT_EMPTY_OPTION_CAPTION.to_string(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: String::new(),
            filter_attribute: String::new(),
            default_filter: String::new(),
            default_sort: String::new(),
            default_sort_direction: SortDirection::Ascending.as_str().to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            gallery_columns: 4,
            empty_placeholder: DEFAULT_EMPTY_PLACEHOLDER.to_string(),
            show_record_ids: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            file: "gallerist.log".to_string(),
        }
    }
}

impl DataConfig {
    /// Parsed initial sort direction. `validate` has already rejected
    /// unknown strings, so this only falls back for unvalidated configs.
    pub fn sort_direction(&self) -> SortDirection {
        SortDirection::parse(&self.default_sort_direction).unwrap_or_default()
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("gallerist.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("gallerist").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.header_height < HEADER_MIN_HEIGHT || self.ui.header_height > HEADER_MAX_HEIGHT {
            anyhow::bail!(
                "header_height must be between {} and {} lines, got {}",
                HEADER_MIN_HEIGHT,
                HEADER_MAX_HEIGHT,
                self.ui.header_height
            );
        }

        if self.display.gallery_columns < GALLERY_MIN_COLUMNS || self.display.gallery_columns > GALLERY_MAX_COLUMNS {
            anyhow::bail!(
                "gallery_columns must be between {} and {}, got {}",
                GALLERY_MIN_COLUMNS,
                GALLERY_MAX_COLUMNS,
                self.display.gallery_columns
            );
        }

        if SortDirection::parse(&self.data.default_sort_direction).is_none() {
            anyhow::bail!(
                "default_sort_direction must be \"ascending\" or \"descending\", got '{}'",
                self.data.default_sort_direction
            );
        }

        if self.logging.enabled && self.logging.file.is_empty() {
            anyhow::bail!("logging.file cannot be empty when logging is enabled");
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Gallerist Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("gallerist"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
