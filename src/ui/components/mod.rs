//! UI components for the Gallerist application.

pub mod dropdown;
pub mod dropdown_filter;
pub mod dropdown_sort;
pub mod gallery;
pub mod help_panel;
pub mod scrollbar_helper;
pub mod status_bar;

pub use dropdown_filter::DropdownFilter;
pub use dropdown_sort::DropdownSort;
pub use gallery::GalleryView;
pub use help_panel::HelpPanel;
pub use status_bar::StatusBar;
