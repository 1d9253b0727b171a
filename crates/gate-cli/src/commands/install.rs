// Rust guideline compliant 2026-10-19

//! Implementation of the `gate install` command.

use crate::terminal::print_success;
use anyhow::Result;

/// Installs the pre-commit hook into the current repository.
///
/// # Arguments
///
/// * `force` - Replace a pre-commit hook written by another tool
///
/// # Errors
///
/// Returns an error if the current directory is not in a Git repository or
/// a foreign hook exists and `force` is false.
pub fn execute(force: bool) -> Result<()> {
    let hook_path = gate_hooks::install_pre_commit_hook(&std::env::current_dir()?, force)?;
    print_success(&format!("Installed pre-commit hook at {}", hook_path.display()));
    Ok(())
}
