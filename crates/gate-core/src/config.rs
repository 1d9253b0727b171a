// Rust guideline compliant 2026-10-19

//! Configuration management for the commit gate.

use crate::notice::DEFAULT_NOTICE;
use crate::{CommandSpec, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name of the optional configuration file at the repository root.
pub const CONFIG_FILE_NAME: &str = "gate.toml";

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Configuration for the gate's external commands and output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateConfig {
    /// Diagnostic log level (error, warn, info, debug, trace).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Notice printed after drift has been fixed.
    #[serde(default = "default_notice")]
    pub notice: String,

    /// Non-mutating format check.
    #[serde(default = "CommandSpec::default_check")]
    pub check: CommandSpec,

    /// Formatter applying fixes in place.
    #[serde(default = "CommandSpec::default_fix")]
    pub fix: CommandSpec,

    /// Test suite runner.
    #[serde(default = "CommandSpec::default_test")]
    pub test: CommandSpec,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_notice() -> String {
    DEFAULT_NOTICE.to_string()
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            notice: default_notice(),
            check: CommandSpec::default_check(),
            fix: CommandSpec::default_fix(),
            test: CommandSpec::default_test(),
        }
    }
}

impl GateConfig {
    /// Loads configuration for a repository.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `gate.toml` in the repository root
    ///
    /// # Arguments
    ///
    /// * `repo_root` - Path to the repository root
    ///
    /// # Returns
    ///
    /// A validated GateConfig.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(repo_root: &Path) -> Result<Self> {
        let config_path = repo_root.join(CONFIG_FILE_NAME);
        let config = if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("{}: {}", config_path.display(), e)))?
        } else {
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A command has an empty program
    /// - log_level is not a known level
    pub fn validate(&self) -> Result<()> {
        for (name, command) in [("check", &self.check), ("fix", &self.fix), ("test", &self.test)] {
            if command.program.trim().is_empty() {
                return Err(Error::EmptyCommand(name.to_string()));
            }
        }

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(Error::InvalidConfig(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Saves the configuration to `gate.toml` in the repository root.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, repo_root: &Path) -> Result<()> {
        let content = self.to_toml()?;
        std::fs::write(repo_root.join(CONFIG_FILE_NAME), content)?;
        Ok(())
    }

    /// Renders the configuration as pretty-printed TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))
    }
}
