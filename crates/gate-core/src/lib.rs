// Rust guideline compliant 2026-10-19

//! Commit Gate Core Library
//!
//! This crate provides the building blocks of the commit gate:
//! - Command model (CommandSpec, ExitStatus)
//! - Subprocess runner seam (CommandRunner, SystemRunner)
//! - Gate state machine (GateState, CommitGate, GateOutcome)
//! - Drift notice rendering
//! - Configuration loading and validation
//! - Error types and result handling

pub mod command;
pub mod config;
pub mod error;
pub mod gate;
pub mod notice;
pub mod runner;

pub use command::{CommandSpec, ExitStatus};
pub use config::{GateConfig, CONFIG_FILE_NAME};
pub use error::{Error, Result};
pub use gate::{CommitGate, GateOutcome, GateState};
pub use notice::write_notice;
pub use runner::{CommandRunner, SystemRunner};
