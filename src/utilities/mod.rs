//! Utility Modules
//!
//! Terminal helpers for the smoke runner report.

pub mod colors;

pub use colors::{Color, Colored, Painter};
