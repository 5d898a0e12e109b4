//! Reusable UI components

pub mod dialog_component;
pub mod dialogs;
pub mod header_component;
pub mod scrollbar_helper;
pub mod select_component;
pub mod sidebar_component;
pub mod sidebar_item_component;
pub mod status_bar;
pub mod table_component;
pub mod tabs_component;
pub mod toolbar_component;

// Component exports
pub use dialog_component::DialogComponent;
pub use header_component::HeaderComponent;
pub use sidebar_component::SidebarComponent;
pub use table_component::TableComponent;
pub use tabs_component::TabsComponent;
pub use toolbar_component::ToolbarComponent;
