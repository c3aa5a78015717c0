//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `ACCOUNTS` prefix and
//! nested values use double underscores as separators:
//!
//! - `ACCOUNTS__LOG__LEVEL=debug` -> `log.level = "debug"`
//! - `ACCOUNTS__SWEEP__ACTIVATION_DAYS=14` -> `sweep.activation_days = 14`

mod error;
mod logging;
mod sweep;

pub use error::{ConfigError, ValidationError};
pub use logging::LogConfig;
pub use sweep::SweepConfig;

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration (level filter)
    #[serde(default)]
    pub log: LogConfig,

    /// Status sweep thresholds
    #[serde(default)]
    pub sweep: SweepConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Loads a `.env` file if present, then reads `ACCOUNTS`-prefixed
    /// variables into typed sections. Every section has defaults, so an
    /// empty environment is valid.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ACCOUNTS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.log.validate()?;
        self.sweep.validate()?;
        Ok(())
    }
}
