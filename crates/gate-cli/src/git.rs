// Rust guideline compliant 2026-10-19

//! Shared Git helpers for CLI commands.

use git2::Repository;
use std::path::{Path, PathBuf};

/// Returns the working tree root containing `path`.
///
/// Falls back to `path` itself when it is not inside a non-bare repository,
/// so the gate can also run in plain directories.
///
/// # Arguments
///
/// * `path` - Starting directory
///
/// # Returns
///
/// The directory the gate should operate on.
pub fn workdir_or(path: &Path) -> PathBuf {
    Repository::discover(path)
        .ok()
        .and_then(|repo| repo.workdir().map(Path::to_path_buf))
        .unwrap_or_else(|| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_workdir_from_subdirectory() {
        let temp_dir = TempDir::new().unwrap();
        Repository::init(temp_dir.path()).unwrap();
        let nested = temp_dir.path().join("src/nested");
        std::fs::create_dir_all(&nested).unwrap();

        let root = workdir_or(&nested);
        assert_eq!(
            root.canonicalize().unwrap(),
            temp_dir.path().canonicalize().unwrap()
        );
    }
}
