//! QuestionBankProvider port - Source of survey questions.

use async_trait::async_trait;

use super::StoreError;
use crate::domain::survey::Question;

/// Read-only access to the full question bank for a session.
#[async_trait]
pub trait QuestionBankProvider: Send + Sync {
    /// Loads every question with its stable id, category and weight attributes.
    async fn load_questions(&self) -> Result<Vec<Question>, StoreError>;
}
