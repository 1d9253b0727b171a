// Rust guideline compliant 2026-10-19

//! End-to-end tests for the `gate-pre-commit` binary.

#![cfg(unix)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::str::{contains, is_empty};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn hook(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("gate-pre-commit");
    cmd.current_dir(dir).env("NO_COLOR", "1");
    cmd
}

fn write_config(dir: &Path, check: &str, fix: &str, test: &str) {
    let content = format!(
        "[check]\nprogram = \"sh\"\nargs = [\"-c\", \"{}\"]\n\n\
         [fix]\nprogram = \"sh\"\nargs = [\"-c\", \"{}\"]\n\n\
         [test]\nprogram = \"sh\"\nargs = [\"-c\", \"{}\"]\n",
        check, fix, test
    );
    fs::write(dir.join("gate.toml"), content).expect("Failed to write gate.toml");
}

#[test]
fn test_clean_tree_and_passing_tests_exit_zero_silently() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_config(temp_dir.path(), "exit 0", "touch fixed", "touch tested");

    hook(temp_dir.path())
        .assert()
        .code(0)
        .stdout(is_empty())
        .stderr(is_empty());
    assert!(temp_dir.path().join("tested").exists());
    assert!(!temp_dir.path().join("fixed").exists());
}

#[test]
fn test_drift_prints_only_the_notice_and_exits_with_check_status() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_config(
        temp_dir.path(),
        "test -f formatted || exit 1",
        "touch formatted",
        "touch tested",
    );

    hook(temp_dir.path())
        .assert()
        .code(1)
        .stdout(" Formatted. Please run git add\n")
        .stderr(is_empty());
    assert!(temp_dir.path().join("formatted").exists());
    assert!(!temp_dir.path().join("tested").exists());

    hook(temp_dir.path())
        .assert()
        .code(0)
        .stdout(is_empty());
    assert!(temp_dir.path().join("tested").exists());
}

#[test]
fn test_checker_status_passes_through_verbatim() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_config(temp_dir.path(), "exit 3", "exit 0", "exit 0");

    hook(temp_dir.path()).assert().code(3);
}

#[test]
fn test_failing_tests_exit_with_test_status_and_no_notice() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_config(temp_dir.path(), "exit 0", "touch fixed", "exit 1");

    hook(temp_dir.path())
        .assert()
        .code(1)
        .stdout(is_empty())
        .stderr(is_empty());
    assert!(!temp_dir.path().join("fixed").exists());

    write_config(temp_dir.path(), "exit 0", "exit 0", "exit 101");
    hook(temp_dir.path()).assert().code(101).stdout(is_empty());
}

#[test]
fn test_reformat_failure_exits_one_without_notice_or_tests() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    write_config(temp_dir.path(), "exit 4", "exit 2", "touch tested");

    hook(temp_dir.path())
        .assert()
        .code(1)
        .stdout(is_empty())
        .stderr(contains("failed"));
    assert!(!temp_dir.path().join("tested").exists());
}
