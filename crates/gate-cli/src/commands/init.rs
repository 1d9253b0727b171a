// Rust guideline compliant 2026-10-19

//! Implementation of the `gate init` command.
//!
//! Writes a default `gate.toml` at the repository root and installs the
//! pre-commit hook.

use crate::git::workdir_or;
use crate::terminal::{print_success, print_warning};
use anyhow::Result;
use gate_core::{GateConfig, CONFIG_FILE_NAME};
use gate_hooks::install::HookConflict;

/// Initializes the gate for the current repository.
///
/// An existing `gate.toml` is kept. A foreign pre-commit hook is reported
/// and left in place.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration file cannot be written
/// - The current directory is not in a Git repository
pub fn execute() -> Result<()> {
    let repo_root = workdir_or(&std::env::current_dir()?);

    let config_path = repo_root.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        print_warning(&format!("Keeping existing {}", config_path.display()));
    } else {
        GateConfig::default().save(&repo_root)?;
        print_success(&format!("Created {}", config_path.display()));
    }

    match gate_hooks::install_pre_commit_hook(&repo_root, false) {
        Ok(hook_path) => {
            print_success(&format!("Installed pre-commit hook at {}", hook_path.display()));
        }
        Err(err) => match err.downcast_ref::<HookConflict>() {
            Some(conflict) => print_warning(&conflict.to_string()),
            None => return Err(err),
        },
    }

    Ok(())
}
