// Rust guideline compliant 2026-10-19

//! Pre-commit hook installation.
//!
//! Writes a small shell shim into the repository's hooks directory that
//! execs the `gate-pre-commit` binary. Hooks written by other tools are
//! never touched unless explicitly forced.

use anyhow::{Context, Result};
use git2::Repository;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Marker line identifying hooks written by this crate.
pub const HOOK_MARKER: &str = "# installed by commit-gate";

/// A pre-commit hook written by another tool is in the way.
#[derive(Debug, Error)]
#[error("A pre-commit hook already exists at {}. Use --force to replace it.", path.display())]
pub struct HookConflict {
    /// Path of the existing hook.
    pub path: PathBuf,
}

/// Returns the contents of the pre-commit shim.
pub fn hook_script() -> String {
    format!("#!/bin/sh\n{}\nexec gate-pre-commit\n", HOOK_MARKER)
}

/// Installs the pre-commit hook.
///
/// # Arguments
///
/// * `repo_path` - Any path inside the Git repository
/// * `force` - Overwrite an existing hook written by another tool
///
/// # Returns
///
/// The path of the installed hook.
///
/// # Errors
///
/// Returns an error if:
/// - `repo_path` is not inside a Git repository
/// - A foreign pre-commit hook exists and `force` is false
/// - The hook file cannot be written
pub fn install_pre_commit_hook(repo_path: &Path, force: bool) -> Result<PathBuf> {
    let hooks_dir = hooks_dir(repo_path)?;
    fs::create_dir_all(&hooks_dir)
        .with_context(|| format!("Failed to create {}", hooks_dir.display()))?;

    let hook_path = hooks_dir.join("pre-commit");
    if hook_path.exists() && !force && !is_gate_hook(&hook_path)? {
        return Err(HookConflict { path: hook_path }.into());
    }

    fs::write(&hook_path, hook_script())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&hook_path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&hook_path, perms)?;
    }

    debug!(path = %hook_path.display(), "installed pre-commit hook");
    Ok(hook_path)
}

/// Removes the pre-commit hook if this crate installed it.
///
/// # Arguments
///
/// * `repo_path` - Any path inside the Git repository
///
/// # Returns
///
/// `true` if a hook was removed, `false` if none of ours was present.
///
/// # Errors
///
/// Returns an error if the repository cannot be found or the hook cannot be
/// removed.
pub fn uninstall_pre_commit_hook(repo_path: &Path) -> Result<bool> {
    let hook_path = hooks_dir(repo_path)?.join("pre-commit");
    if !hook_path.exists() || !is_gate_hook(&hook_path)? {
        return Ok(false);
    }
    fs::remove_file(&hook_path)?;
    Ok(true)
}

fn is_gate_hook(path: &Path) -> Result<bool> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().any(|line| line == HOOK_MARKER))
}

/// Resolves the hooks directory, honoring `core.hooksPath`.
///
/// Hooks live in the common Git directory, which linked worktrees share with
/// the main checkout. A relative `core.hooksPath` resolves against the
/// working tree the hook runs in, or the common directory for bare
/// repositories.
fn hooks_dir(repo_path: &Path) -> Result<PathBuf> {
    let repo = Repository::discover(repo_path)
        .map_err(|_| anyhow::anyhow!("Not a git repository. Run 'git init' first."))?;

    if let Ok(custom) = repo.config()?.get_path("core.hooksPath") {
        if custom.is_absolute() {
            return Ok(custom);
        }
        let base = repo.workdir().unwrap_or_else(|| repo.commondir());
        return Ok(base.join(custom));
    }

    Ok(repo.commondir().join("hooks"))
}
