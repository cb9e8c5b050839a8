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
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Consistency threshold must be in (0, 1], got {0}")]
    InvalidConsistencyThreshold(f64),

    #[error("Suggestion count must be at least 1")]
    InvalidSuggestionCount,

    #[error("Derived informativeness must be a positive number of bits, got {0}")]
    InvalidInformativenessBits(f64),
}
