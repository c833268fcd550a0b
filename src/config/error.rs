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
    #[error("Log filter must not be empty")]
    EmptyLogFilter,

    #[error("Sampler count_per_category must be at least 1")]
    InvalidSampleCount,

    #[error("Sampler high_weight_count ({high}) exceeds count_per_category ({count})")]
    HighWeightExceedsCount { high: usize, count: usize },

    #[error("Question bank path must not be empty")]
    EmptyQuestionBankPath,

    #[error("Unsupported question bank format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedBankFormat(String),
}
