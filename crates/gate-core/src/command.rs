// Rust guideline compliant 2026-10-19

//! Command model for the external tools the gate invokes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An external command, invoked by program name and argument list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    /// Program to execute, resolved through `PATH`.
    pub program: String,

    /// Arguments passed to the program.
    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandSpec {
    /// Creates a new command specification.
    ///
    /// # Arguments
    ///
    /// * `program` - Program name or path
    /// * `args` - Argument list
    ///
    /// # Returns
    ///
    /// A new CommandSpec instance.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Default format check: `cargo fmt --check --quiet`.
    pub fn default_check() -> Self {
        Self::new("cargo", ["fmt", "--check", "--quiet"])
    }

    /// Default formatter: `cargo fmt`.
    pub fn default_fix() -> Self {
        Self::new("cargo", ["fmt"])
    }

    /// Default test runner: `cargo test`.
    pub fn default_test() -> Self {
        Self::new("cargo", ["test"])
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Integer outcome of a finished subprocess. Zero means success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExitStatus(i32);

impl ExitStatus {
    /// The successful status.
    pub const SUCCESS: ExitStatus = ExitStatus(0);

    /// Creates a status from a raw exit code.
    pub fn from_code(code: i32) -> Self {
        Self(code)
    }

    /// Returns the raw exit code.
    pub fn code(&self) -> i32 {
        self.0
    }

    /// Returns whether the status is zero.
    pub fn success(&self) -> bool {
        self.0 == 0
    }
}

impl From<std::process::ExitStatus> for ExitStatus {
    /// Converts a process status, mapping signal termination to `128 + signal`.
    fn from(status: std::process::ExitStatus) -> Self {
        if let Some(code) = status.code() {
            return Self(code);
        }

        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = status.signal() {
                return Self(128 + signal);
            }
        }

        Self(1)
    }
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exit status {}", self.0)
    }
}
