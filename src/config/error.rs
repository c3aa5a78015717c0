//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Sweep activation threshold must be positive")]
    InvalidActivationDays,

    #[error("Sweep client dormancy threshold must be positive")]
    InvalidClientDormancyDays,

    #[error("Client dormancy threshold must exceed the activation threshold")]
    DormancyBelowActivation,

    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),
}
