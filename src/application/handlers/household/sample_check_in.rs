//! SampleCheckInHandler - Query handler for the questions of a check-in.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, FamilyId, Period};
use crate::domain::sampling::{QuestionSampler, SamplerSettings};
use crate::domain::survey::Question;
use crate::ports::{PrioritiesProvider, QuestionBankProvider};

/// Query for the questions to ask in a period.
#[derive(Debug, Clone)]
pub struct SampleCheckInQuery {
    pub family_id: FamilyId,
    pub period: Period,
}

/// Sampled questions, grouped by category in canonical order.
pub type SampleCheckInResult = Vec<Question>;

/// Handler for sampling check-in questions.
pub struct SampleCheckInHandler {
    question_bank: Arc<dyn QuestionBankProvider>,
    priorities: Arc<dyn PrioritiesProvider>,
    sampler: QuestionSampler,
}

impl SampleCheckInHandler {
    pub fn new(
        question_bank: Arc<dyn QuestionBankProvider>,
        priorities: Arc<dyn PrioritiesProvider>,
        settings: SamplerSettings,
    ) -> Self {
        Self {
            question_bank,
            priorities,
            sampler: QuestionSampler::new(settings),
        }
    }

    pub async fn handle(
        &self,
        query: SampleCheckInQuery,
    ) -> Result<SampleCheckInResult, DomainError> {
        let bank = self.question_bank.load_questions().await?;
        let priorities = self.priorities.get_priorities(query.family_id).await?;

        let sampled = self.sampler.sample(&bank, query.period, Some(&priorities));
        info!(
            family_id = %query.family_id,
            period = %query.period,
            bank_size = bank.len(),
            sampled = sampled.len(),
            "Sampled check-in questions"
        );
        Ok(sampled)
    }
}
