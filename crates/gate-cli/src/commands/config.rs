// Rust guideline compliant 2026-10-19

//! Implementation of the `gate config` command.

use crate::git::workdir_or;
use anyhow::Result;
use gate_core::GateConfig;

/// Prints the effective configuration as TOML.
///
/// # Errors
///
/// Returns an error if `gate.toml` is invalid.
pub fn execute() -> Result<()> {
    let repo_root = workdir_or(&std::env::current_dir()?);
    let config = GateConfig::load(&repo_root)?;
    print!("{}", config.to_toml()?);
    Ok(())
}
