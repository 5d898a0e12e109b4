#[path = "components/dialog_component.rs"]
mod dialog_component;

#[path = "components/select_component.rs"]
mod select_component;

#[path = "components/sidebar_component.rs"]
mod sidebar_component;

#[path = "components/table_component.rs"]
mod table_component;

#[path = "components/toolbar_component.rs"]
mod toolbar_component;
