//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `HOUSEHOLD_BALANCE` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use household_balance::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Question bank at {}", config.question_bank.path.display());
//! ```

mod error;
mod logging;
mod question_bank;
mod sampler;

pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use question_bank::QuestionBankConfig;
pub use sampler::SamplerConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment is a valid configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Log filter and output format
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Check-in sampling sizes
    #[serde(default)]
    pub sampler: SamplerConfig,

    /// Question bank file
    #[serde(default)]
    pub question_bank: QuestionBankConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `HOUSEHOLD_BALANCE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `HOUSEHOLD_BALANCE__SAMPLER__COUNT_PER_CATEGORY=4` -> `sampler.count_per_category = 4`
    /// - `HOUSEHOLD_BALANCE__QUESTION_BANK__PATH=bank.yaml` -> `question_bank.path = bank.yaml`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("HOUSEHOLD_BALANCE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.logging.validate()?;
        self.sampler.validate()?;
        self.question_bank.validate()?;
        Ok(())
    }
}
