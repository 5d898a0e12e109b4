//! Utility helpers shared across the application.
//!
//! - [`color`] - Theme color parsing into terminal colors

pub mod color;
