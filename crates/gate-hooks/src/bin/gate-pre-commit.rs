// Rust guideline compliant 2026-10-19

//! CLI entry point for the commit gate pre-commit hook.

fn main() -> anyhow::Result<()> {
    let repo_path = std::env::current_dir()?;
    let code = gate_hooks::pre_commit_hook(&repo_path)?;
    std::process::exit(code);
}
