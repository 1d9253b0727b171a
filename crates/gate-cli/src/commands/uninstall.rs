// Rust guideline compliant 2026-10-19

//! Implementation of the `gate uninstall` command.

use crate::terminal::{print_info, print_success};
use anyhow::Result;

/// Removes the pre-commit hook if it was installed by `gate`.
///
/// # Errors
///
/// Returns an error if the current directory is not in a Git repository.
pub fn execute() -> Result<()> {
    if gate_hooks::uninstall_pre_commit_hook(&std::env::current_dir()?)? {
        print_success("Removed pre-commit hook");
    } else {
        print_info("No gate pre-commit hook installed");
    }
    Ok(())
}
