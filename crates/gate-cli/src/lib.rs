// Rust guideline compliant 2026-10-19

//! Commit Gate CLI library.
//!
//! This library exposes the CLI modules for use in tests and external code.

pub mod commands;
pub mod git;
pub mod terminal;

pub use terminal::{color_choice, set_color_enabled, should_use_color};
