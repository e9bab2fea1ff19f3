//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and layout bounds
//! to improve maintainability and consistency.

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const ERROR_NO_DATASET: &str = "❌ Error: no dataset file configured";
pub const LOADING_MESSAGE: &str = "Loading records...";
pub const STATUS_HINTS: &str = "Tab: next widget • Enter: open/select • d: sort direction • ?: help • q: quit";

// Widget Titles
pub const FILTER_TITLE: &str = "Filter";
pub const SORT_TITLE: &str = "Sort";
pub const GALLERY_TITLE: &str = "Records";
pub const HELP_TITLE: &str = "Help";

// Default Captions
pub const DEFAULT_EMPTY_OPTION_CAPTION: &str = "(none)";
pub const DEFAULT_EMPTY_PLACEHOLDER: &str = "No records match the current filter";

// Selection Markers
pub const CHECKBOX_CHECKED: &str = "[x] ";
pub const CHECKBOX_UNCHECKED: &str = "[ ] ";
pub const SORT_ASCENDING_INDICATOR: &str = "▲";
pub const SORT_DESCENDING_INDICATOR: &str = "▼";

// UI Layout Constants
/// Minimum header row height in lines (one bordered trigger)
pub const HEADER_MIN_HEIGHT: u16 = 3;
/// Maximum header row height in lines
pub const HEADER_MAX_HEIGHT: u16 = 5;
/// Default header row height in lines
pub const HEADER_DEFAULT_HEIGHT: u16 = 3;
/// Minimum number of gallery columns
pub const GALLERY_MIN_COLUMNS: u16 = 1;
/// Maximum number of gallery columns
pub const GALLERY_MAX_COLUMNS: u16 = 12;
/// Maximum number of option rows a dropdown popup may occupy
pub const DROPDOWN_MAX_POPUP_ROWS: u16 = 10;
