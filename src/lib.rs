//! refdesk - a terminal admin shell around a filterable, sortable table
//!
//! The shell has a collapsible navigation sidebar, a header, two content
//! tabs and a reference table whose filter and sort state is owned by a
//! single controller.
//!
//! # Modules
//!
//! * [`table`] - Table state, the view controller and the row projection
//! * [`dataset`] - The static reference records
//! * [`navigation`] - Sidebar menu description
//! * [`config`] - Application configuration management
//! * [`theme`] - Color tokens, built-in or loaded from JSON
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Utility helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// The reference dataset
pub mod dataset;

/// Typed domain errors
pub mod error;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Sidebar navigation menu
pub mod navigation;

/// Filter and sort state of the reference table
pub mod table;

/// Theme tokens
pub mod theme;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions and helpers
pub mod utils;
