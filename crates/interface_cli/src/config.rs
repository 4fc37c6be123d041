//! CLI configuration

use serde::Deserialize;

use core_kernel::CoreError;

use crate::error::CliError;

/// Log levels accepted for `log_level`
const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level used when `RUST_LOG` is unset
    pub log_level: String,
    /// Pretty-print the JSON result
    pub pretty: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            pretty: false,
        }
    }
}

impl CliConfig {
    /// Loads configuration from `FNOL_`-prefixed environment variables
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Environment::with_prefix("FNOL").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// Loads and validates configuration from the environment
    pub fn load() -> Result<Self, CliError> {
        let config = Self::from_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects a log level the subscriber would not understand
    pub fn validate(&self) -> Result<(), CoreError> {
        let level = self.log_level.to_ascii_lowercase();
        if LOG_LEVELS.contains(&level.as_str()) {
            Ok(())
        } else {
            Err(CoreError::configuration(format!(
                "unknown log level '{}', expected one of {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            )))
        }
    }
}
