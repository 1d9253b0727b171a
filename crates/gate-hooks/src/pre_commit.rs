// Rust guideline compliant 2026-10-19

//! Pre-commit hook implementation.
//!
//! Checks formatting, fixes drift and rejects the commit, or runs the test
//! suite and reports its status.

use anyhow::Result;
use gate_core::{CommitGate, GateConfig, SystemRunner};
use std::path::Path;
use termcolor::{ColorChoice, StandardStream};
use tracing::info;

/// Runs the pre-commit hook.
///
/// # Arguments
///
/// * `repo_path` - Path to the repository root
///
/// # Returns
///
/// The exit code the hook process should report.
///
/// # Errors
///
/// Returns an error if:
/// - `gate.toml` is invalid
/// - A command cannot be started
/// - The formatter fails while fixing drift
pub fn pre_commit_hook(repo_path: &Path) -> Result<i32> {
    let config = GateConfig::load(repo_path)?;
    crate::init_tracing(&config.log_level)?;
    run_gate(repo_path, &config, ColorChoice::Auto)
}

/// Runs the gate against a repository with an already loaded configuration.
///
/// Commands run inside `repo_path` with inherited stdio. The drift notice is
/// written to stdout.
///
/// # Arguments
///
/// * `repo_path` - Path to the repository root
/// * `config` - Gate configuration
/// * `color` - Color choice for the notice
///
/// # Returns
///
/// The exit code the hook process should report.
///
/// # Errors
///
/// Returns an error if the gate aborts.
pub fn run_gate(repo_path: &Path, config: &GateConfig, color: ColorChoice) -> Result<i32> {
    let mut stdout = StandardStream::stdout(color);
    let runner = SystemRunner::in_dir(repo_path);
    let outcome = CommitGate::new(config, runner).run(&mut stdout)?;
    info!(?outcome, "gate finished");
    Ok(outcome.exit_code())
}
