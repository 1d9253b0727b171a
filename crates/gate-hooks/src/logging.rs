// Rust guideline compliant 2026-10-19

//! Diagnostic logging setup.
//!
//! Logs go to stderr; stdout is reserved for the drift notice.

use anyhow::Result;
use tracing::Level;
use tracing_subscriber::fmt;

/// Installs the global tracing subscriber.
///
/// A subscriber that is already installed is left in place.
///
/// # Arguments
///
/// * `level` - Log level name (error, warn, info, debug, trace)
///
/// # Errors
///
/// Returns an error if the level name is unknown.
pub fn init_tracing(level: &str) -> Result<()> {
    let level = parse_log_level(level)?;
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}

/// Parses a log level name, case-insensitively.
///
/// # Errors
///
/// Returns an error if the level name is unknown.
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "error" => Ok(Level::ERROR),
        "warn" => Ok(Level::WARN),
        "info" => Ok(Level::INFO),
        "debug" => Ok(Level::DEBUG),
        "trace" => Ok(Level::TRACE),
        other => anyhow::bail!("Invalid log level: {}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("WARN").unwrap(), Level::WARN);
        assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
        assert!(parse_log_level("verbose").is_err());
    }

    #[test]
    fn test_init_tracing_twice_is_ok() {
        init_tracing("error").unwrap();
        init_tracing("debug").unwrap();
    }
}
