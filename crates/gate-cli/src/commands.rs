// Rust guideline compliant 2026-10-19

//! Command implementations for the `gate` CLI.

pub mod config;
pub mod init;
pub mod install;
pub mod run;
pub mod uninstall;
