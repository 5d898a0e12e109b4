//! Constants used throughout the application
//!
//! This module centralizes UI text, labels and layout limits to improve
//! maintainability and consistency.

// Application
pub const APP_NAME: &str = "refdesk";
pub const LOGO_FULL: &str = "▣ REFDESK";
pub const LOGO_ICON: &str = "▣";

// Tabs
pub const TAB_LIST: &str = "Список";
pub const TAB_PARALLEL: &str = "Параллельный просмотр";
pub const TAB_PARALLEL_CONTENT: &str = "Content of Tab Pane 2";

// Toolbar buttons
pub const BUTTON_SORT_AGE: &str = "Sort age";
pub const BUTTON_CLEAR_FILTERS: &str = "Clear filters";
pub const BUTTON_CLEAR_ALL: &str = "Clear filters and sorters";

// Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";
pub const INFO_NO_FILTER_FOR_COLUMN: &str = "This column has no filters";
pub const EMPTY_TABLE: &str = "No data";
pub const DIALOG_TITLE_LOGS: &str = "🔍 Logs - Press 'Esc', 'G' or 'q' to close";

// UI Layout Constants
/// Minimum sidebar width in columns
pub const SIDEBAR_MIN_WIDTH: u16 = 15;
/// Maximum sidebar width in columns
pub const SIDEBAR_MAX_WIDTH: u16 = 50;
/// Default sidebar width in columns
pub const SIDEBAR_DEFAULT_WIDTH: u16 = 30;
/// Width of the sidebar when collapsed to icons
pub const SIDEBAR_COLLAPSED_WIDTH: u16 = 7;
/// Minimum main area width to preserve usability
pub const MAIN_AREA_MIN_WIDTH: u16 = 20;
/// Header bar height, including its bottom border
pub const HEADER_HEIGHT: u16 = 3;

// Table
/// Rows per table page
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Largest accepted page size
pub const MAX_PAGE_SIZE: usize = 100;
