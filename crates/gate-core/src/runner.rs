// Rust guideline compliant 2026-10-19

//! Subprocess execution seam.
//!
//! The gate only depends on the exit-status contract of the tools it runs,
//! so execution sits behind the [`CommandRunner`] trait. [`SystemRunner`]
//! spawns real processes; tests substitute scripted runners.

use crate::{CommandSpec, Error, ExitStatus, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Runs external commands to completion.
pub trait CommandRunner {
    /// Runs a command, blocking until it exits.
    ///
    /// # Arguments
    ///
    /// * `command` - The command to run
    ///
    /// # Returns
    ///
    /// The exit status of the finished command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command cannot be started.
    fn run(&mut self, command: &CommandSpec) -> Result<ExitStatus>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &mut R {
    fn run(&mut self, command: &CommandSpec) -> Result<ExitStatus> {
        (**self).run(command)
    }
}

/// Runner that spawns real subprocesses with inherited stdio.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    working_dir: Option<PathBuf>,
}

impl SystemRunner {
    /// Creates a runner that uses the current process directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a runner that spawns every command inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            working_dir: Some(dir.to_path_buf()),
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(&mut self, command: &CommandSpec) -> Result<ExitStatus> {
        let mut process = Command::new(&command.program);
        process.args(&command.args);
        if let Some(dir) = &self.working_dir {
            process.current_dir(dir);
        }

        debug!(command = %command, "spawning");
        let status = process.status().map_err(|source| Error::Spawn {
            command: command.to_string(),
            source,
        })?;
        let status = ExitStatus::from(status);
        debug!(command = %command, status = status.code(), "finished");
        Ok(status)
    }
}
