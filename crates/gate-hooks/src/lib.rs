// Rust guideline compliant 2026-10-19

//! Commit Gate Git Hooks
//!
//! This crate wires the gate into Git:
//! - Pre-commit hook execution
//! - Hook installation and removal
//! - Diagnostic logging setup

pub mod install;
pub mod logging;
pub mod pre_commit;

pub use install::{install_pre_commit_hook, uninstall_pre_commit_hook};
pub use logging::init_tracing;
pub use pre_commit::{pre_commit_hook, run_gate};
