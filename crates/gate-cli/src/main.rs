// Rust guideline compliant 2026-10-19

//! Commit Gate CLI Application
//!
//! Command-line interface for running and installing the commit gate.

use clap::Parser;
use gate_cli::commands;
use gate_cli::{set_color_enabled, should_use_color};

#[derive(Parser, Debug)]
#[command(
    name = "gate",
    version,
    about = "Commit gate: block commits on formatting drift and failing tests",
    long_about = "Runs a format check before each commit. Drifted trees are reformatted in place and the commit is rejected; clean trees run the test suite and commit only if it passes.",
    after_help = "Examples:\n  gate init\n  gate install --force\n  gate run\n  gate config\n"
)]
struct Cli {
    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Run the gate in the current repository
    Run,

    /// Write a default gate.toml and install the pre-commit hook
    Init,

    /// Install the pre-commit hook
    Install {
        /// Replace a pre-commit hook written by another tool
        #[arg(long)]
        force: bool,
    },

    /// Remove the pre-commit hook
    Uninstall,

    /// Print the effective configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    set_color_enabled(!cli.no_color && should_use_color());

    let log_level = cli.log_level.as_deref();
    match cli.command {
        Some(Commands::Run) => {
            let code = commands::run::execute(log_level)?;
            std::process::exit(code);
        }
        Some(Commands::Init) => {
            init_logging(log_level)?;
            commands::init::execute()?;
        }
        Some(Commands::Install { force }) => {
            init_logging(log_level)?;
            commands::install::execute(force)?;
        }
        Some(Commands::Uninstall) => {
            init_logging(log_level)?;
            commands::uninstall::execute()?;
        }
        Some(Commands::Config) => {
            init_logging(log_level)?;
            commands::config::execute()?;
        }
        None => {
            println!("Use --help for usage information");
        }
    }

    Ok(())
}

fn init_logging(level: Option<&str>) -> anyhow::Result<()> {
    gate_hooks::init_tracing(level.unwrap_or("warn"))
}
