use crate::table::ViewChange;

/// Tabs of the content area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabKey {
    #[default]
    List,
    Parallel,
}

impl TabKey {
    pub const ALL: [TabKey; 2] = [TabKey::List, TabKey::Parallel];

    #[must_use]
    pub fn index(&self) -> usize {
        match self {
            TabKey::List => 0,
            TabKey::Parallel => 1,
        }
    }

    #[must_use]
    pub fn next(&self) -> TabKey {
        match self {
            TabKey::List => TabKey::Parallel,
            TabKey::Parallel => TabKey::List,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    NavigateToMenu(String),
    ToggleSidebar,
    SelectTab(TabKey),

    // Table interactions reported by the table component
    TableChange(ViewChange),

    // Toolbar
    SortByAge,
    ClearFilters,
    ClearAll,
    /// The toolbar picker is wired to the table change callback without a
    /// filter or sort payload
    PickerChanged(String),

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    CycleIconTheme,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogType {
    Help,
    Logs,
    Info(String),
    Error(String),
}
