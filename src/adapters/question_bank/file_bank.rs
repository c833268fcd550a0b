//! File-backed question bank (JSON or YAML).

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::domain::survey::Question;
use crate::ports::{QuestionBankProvider, StoreError};

/// Serialization format of a question bank file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankFormat {
    Json,
    Yaml,
}

impl BankFormat {
    /// Detects the format from the file extension (`json`, `yaml`, `yml`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(BankFormat::Json),
            "yaml" | "yml" => Some(BankFormat::Yaml),
            _ => None,
        }
    }

    /// Parses a bank document in this format.
    pub fn parse(&self, contents: &str) -> Result<Vec<Question>, StoreError> {
        let document: BankDocument = match self {
            BankFormat::Json => serde_json::from_str(contents)
                .map_err(|e| StoreError::Malformed(e.to_string()))?,
            BankFormat::Yaml => serde_yaml::from_str(contents)
                .map_err(|e| StoreError::Malformed(e.to_string()))?,
        };
        Ok(document.into_questions())
    }
}

/// A bank file is either a bare list or an object with a `questions` list.
#[derive(Deserialize)]
#[serde(untagged)]
enum BankDocument {
    List(Vec<Question>),
    Wrapped { questions: Vec<Question> },
}

impl BankDocument {
    fn into_questions(self) -> Vec<Question> {
        match self {
            BankDocument::List(questions) | BankDocument::Wrapped { questions } => questions,
        }
    }
}

/// Question bank read from a file on every load.
#[derive(Debug, Clone)]
pub struct FileQuestionBank {
    path: PathBuf,
}

impl FileQuestionBank {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl QuestionBankProvider for FileQuestionBank {
    async fn load_questions(&self) -> Result<Vec<Question>, StoreError> {
        let format = BankFormat::from_path(&self.path).ok_or_else(|| {
            StoreError::QuestionBankUnavailable(format!(
                "unsupported file extension: {}",
                self.path.display()
            ))
        })?;

        debug!(path = %self.path.display(), ?format, "Reading question bank");
        let contents = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            StoreError::QuestionBankUnavailable(format!("{}: {}", self.path.display(), e))
        })?;

        let questions = format.parse(&contents)?;
        info!(path = %self.path.display(), count = questions.len(), "Loaded question bank");
        Ok(questions)
    }
}
