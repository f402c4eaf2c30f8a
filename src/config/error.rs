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

    #[error("Invalid log filter directive: {0}")]
    InvalidLogLevel(String),

    #[error("Data directory must not be empty")]
    EmptyDataDir,

    #[error("Catalog path must not be empty when set")]
    EmptyCatalogPath,

    #[error("Trend window must be between {min} and {max}, got {value}")]
    TrendWindowOutOfRange { value: usize, min: usize, max: usize },
}
