//! UI module for refdesk
//!
//! This module handles the admin shell: sidebar navigation, header, tabs,
//! the toolbar and table, dialogs, and the event loop driving them.

pub mod app_component;
pub mod components;
pub mod core;
pub mod layout;
pub mod renderer;

pub use app_component::AppComponent;
pub use layout::LayoutManager;
pub use renderer::run_app;
