//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `DEVPLAN` prefix and nested values use double underscores as separators.
//!
//! The engine's rates, multipliers and divisors are fixed and not configurable;
//! only logging and output rendering are.
//!
//! # Example
//!
//! ```no_run
//! use devplan_schema::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod error;
mod logging;
mod output;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogConfig, LogFormat};
pub use output::{OutputConfig, OutputFormat, RenderError};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so loading with an empty environment succeeds.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration (filter directive, format)
    #[serde(default)]
    pub log: LogConfig,

    /// Output configuration (document format, indentation)
    #[serde(default)]
    pub output: OutputConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `DEVPLAN` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `DEVPLAN__LOG__LEVEL=debug` -> `log.level = "debug"`
    /// - `DEVPLAN__OUTPUT__FORMAT=yaml` -> `output.format = yaml`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("DEVPLAN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if the log filter is empty or malformed.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.log.validate()?;
        Ok(())
    }
}
