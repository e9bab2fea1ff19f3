use crate::dataset::Dataset;
use crate::query::SortInstruction;

/// The widget currently receiving keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    Filter,
    Sort,
    #[default]
    Gallery,
}

impl FocusTarget {
    pub fn next(self) -> Self {
        match self {
            Self::Filter => Self::Sort,
            Self::Sort => Self::Gallery,
            Self::Gallery => Self::Filter,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Self::Filter => Self::Gallery,
            Self::Sort => Self::Filter,
            Self::Gallery => Self::Sort,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    // Focus movement
    FocusNext,
    FocusPrevious,
    Focus(FocusTarget),

    // Selection changes reported by the drop-down widgets
    FilterChanged(Vec<String>),
    SortSelectionChanged(Vec<String>),
    SortChanged(Option<SortInstruction>),

    // Data loading
    DataLoaded(Dataset),
    LoadFailed(String),
    ReloadData,

    // UI operations
    ShowHelp(bool),
    HelpScrollUp,
    HelpScrollDown,

    // App control
    Quit,
    None,
}
