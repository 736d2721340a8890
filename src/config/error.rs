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
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid local currency code: {0}")]
    InvalidCurrency(String),

    #[error("max_schedule_periods must be between 1 and 1000")]
    InvalidSchedulePeriods,

    #[error("Field config base URL must use HTTP or HTTPS")]
    InvalidFieldConfigUrl,

    #[error("Field config base URL must use HTTPS in production")]
    FieldConfigUrlMustBeHttps,
}
