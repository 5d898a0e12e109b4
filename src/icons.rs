//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    #[default]
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

/// Named icons used by the navigation menu and header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    Apps,
    Search,
    Plus,
    Tool,
    ProgressCheck,
    Files,
    License,
    Menu,
    User,
    Logout,
}

/// Table header indicators
#[derive(Debug, Clone)]
pub struct TableIcons {
    pub sort_ascend: &'static str,
    pub sort_descend: &'static str,
    pub sortable: &'static str,
    pub filter: &'static str,
    pub filter_active: &'static str,
    pub checked: &'static str,
    pub unchecked: &'static str,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub error: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
    pub success: &'static str,
    pub expanded: &'static str,
    pub collapsed: &'static str,
    pub loading: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub table: TableIcons,
    pub ui: UiIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            table: TableIcons {
                sort_ascend: "🔼",
                sort_descend: "🔽",
                sortable: "↕️",
                filter: "🔍",
                filter_active: "🔎",
                checked: "☑️",
                unchecked: "⬜",
            },
            ui: UiIcons {
                error: "❌",
                info: "💡",
                warning: "⚠️",
                success: "✅",
                expanded: "🔽",
                collapsed: "▶️",
                loading: "⏳",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            table: TableIcons {
                sort_ascend: "▲",
                sort_descend: "▼",
                sortable: "⇅",
                filter: "⏷",
                filter_active: "◆",
                checked: "☑",
                unchecked: "☐",
            },
            ui: UiIcons {
                error: "✗",
                info: "ⓘ",
                warning: "⚠",
                success: "✓",
                expanded: "▾",
                collapsed: "▸",
                loading: "⟳",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            table: TableIcons {
                sort_ascend: "^",
                sort_descend: "v",
                sortable: "-",
                filter: "?",
                filter_active: "*",
                checked: "[x]",
                unchecked: "[ ]",
            },
            ui: UiIcons {
                error: "X",
                info: "i",
                warning: "!",
                success: "+",
                expanded: "v",
                collapsed: ">",
                loading: "...",
            },
        }
    }

    /// Icon for a named menu or header glyph
    #[must_use]
    pub fn glyph(&self, kind: IconKind) -> &'static str {
        match self.current_theme {
            IconTheme::Emoji => match kind {
                IconKind::Apps => "🧩",
                IconKind::Search => "🔍",
                IconKind::Plus => "➕",
                IconKind::Tool => "🔧",
                IconKind::ProgressCheck => "🔄",
                IconKind::Files => "📂",
                IconKind::License => "📜",
                IconKind::Menu => "☰",
                IconKind::User => "👤",
                IconKind::Logout => "🚪",
            },
            IconTheme::Unicode => match kind {
                IconKind::Apps => "▦",
                IconKind::Search => "⌕",
                IconKind::Plus => "+",
                IconKind::Tool => "⚒",
                IconKind::ProgressCheck => "◔",
                IconKind::Files => "▤",
                IconKind::License => "§",
                IconKind::Menu => "≡",
                IconKind::User => "☺",
                IconKind::Logout => "⏻",
            },
            IconTheme::Ascii => match kind {
                IconKind::Apps => "#",
                IconKind::Search => "?",
                IconKind::Plus => "+",
                IconKind::Tool => "T",
                IconKind::ProgressCheck => "%",
                IconKind::Files => "=",
                IconKind::License => "L",
                IconKind::Menu => "=",
                IconKind::User => "@",
                IconKind::Logout => "x",
            },
        }
    }

    #[must_use]
    pub fn sort_ascend(&self) -> &'static str {
        self.icons().table.sort_ascend
    }

    #[must_use]
    pub fn sort_descend(&self) -> &'static str {
        self.icons().table.sort_descend
    }

    #[must_use]
    pub fn sortable(&self) -> &'static str {
        self.icons().table.sortable
    }

    #[must_use]
    pub fn filter(&self, active: bool) -> &'static str {
        let table = self.icons().table;
        if active {
            table.filter_active
        } else {
            table.filter
        }
    }

    #[must_use]
    pub fn checkbox(&self, checked: bool) -> &'static str {
        let table = self.icons().table;
        if checked {
            table.checked
        } else {
            table.unchecked
        }
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn fold_arrow(&self, expanded: bool) -> &'static str {
        let ui = self.icons().ui;
        if expanded {
            ui.expanded
        } else {
            ui.collapsed
        }
    }

    #[must_use]
    pub fn loading(&self) -> &'static str {
        self.icons().ui.loading
    }
}
