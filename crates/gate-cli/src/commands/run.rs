// Rust guideline compliant 2026-10-19

//! Implementation of the `gate run` command.

use crate::git::workdir_or;
use crate::terminal::color_choice;
use anyhow::Result;
use gate_core::GateConfig;
use tracing::debug;

/// Runs the commit gate on the current repository.
///
/// # Arguments
///
/// * `log_level` - Optional override for the configured log level
///
/// # Returns
///
/// The exit code the process should report.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the gate aborts.
pub fn execute(log_level: Option<&str>) -> Result<i32> {
    let repo_root = workdir_or(&std::env::current_dir()?);
    let mut config = GateConfig::load(&repo_root)?;
    if let Some(level) = log_level {
        config.log_level = level.to_string();
        config.validate()?;
    }

    gate_hooks::init_tracing(&config.log_level)?;
    debug!(root = %repo_root.display(), "running gate");
    gate_hooks::run_gate(&repo_root, &config, color_choice())
}
