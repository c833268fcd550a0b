//! Question bank configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::adapters::BankFormat;

/// Location of the question bank file
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionBankConfig {
    /// Path to a `.json`, `.yaml` or `.yml` bank
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

impl QuestionBankConfig {
    /// Validate question bank configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.path.as_os_str().is_empty() {
            return Err(ValidationError::EmptyQuestionBankPath);
        }
        if BankFormat::from_path(&self.path).is_none() {
            return Err(ValidationError::UnsupportedBankFormat(
                self.path.display().to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for QuestionBankConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
        }
    }
}

fn default_path() -> PathBuf {
    PathBuf::from("questions.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_path_is_valid() {
        assert!(QuestionBankConfig::default().validate().is_ok());
    }

    #[test]
    fn test_yaml_paths_accepted() {
        for path in ["bank.yaml", "data/bank.yml"] {
            let config = QuestionBankConfig { path: path.into() };
            assert!(config.validate().is_ok(), "{} should be accepted", path);
        }
    }

    #[test]
    fn test_unsupported_extension_rejected() {
        let config = QuestionBankConfig {
            path: "bank.csv".into(),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::UnsupportedBankFormat(_))
        ));
    }

    #[test]
    fn test_empty_path_rejected() {
        let config = QuestionBankConfig {
            path: PathBuf::new(),
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyQuestionBankPath));
    }
}
