// Rust guideline compliant 2026-10-19

//! Error types for the commit gate core library.

use crate::command::ExitStatus;
use thiserror::Error;

/// Result type alias for gate operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for gate operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An external command could not be started.
    #[error("Failed to run `{command}`: {source}")]
    Spawn {
        /// Rendered command line.
        command: String,
        /// Underlying spawn error.
        source: std::io::Error,
    },

    /// The formatter exited unsuccessfully while fixing drift.
    #[error("Reformat command `{command}` failed with {status}")]
    ReformatFailed {
        /// Rendered command line.
        command: String,
        /// Status reported by the formatter.
        status: ExitStatus,
    },

    /// A configured command has no program.
    #[error("Command `{0}` has an empty program")]
    EmptyCommand(String),

    /// Invalid configuration value or file.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Invalid state transition.
    #[error("Invalid state transition: {0}")]
    InvalidTransition(String),
}
