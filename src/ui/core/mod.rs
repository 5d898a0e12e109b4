//! Core UI functionality for refdesk.
//!
//! This module contains the building blocks every component relies on:
//!
//! - [`actions`] - Action definitions and UI state transitions
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal event polling and frame timing
//!
//! Components turn input into [`Action`]s, actions flow through each
//! component's `update` and finally reach the application component, which
//! owns the table controller and applies the state change.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::{Action, DialogType, TabKey};
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
