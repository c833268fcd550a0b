//! RecommendTasksHandler - Query handler for rebalancing suggestions.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::{DomainError, FamilyId, Period};
use crate::domain::recommendations::{TaskRecommendation, TaskRecommender};
use crate::ports::{PrioritiesProvider, QuestionBankProvider, ResponseStore};

/// Query for task recommendations in a period.
#[derive(Debug, Clone)]
pub struct RecommendTasksQuery {
    pub family_id: FamilyId,
    pub period: Period,
    /// Maximum number of recommendations.
    pub limit: usize,
}

pub type RecommendTasksResult = Vec<TaskRecommendation>;

/// Handler for recommending tasks to hand over.
pub struct RecommendTasksHandler {
    question_bank: Arc<dyn QuestionBankProvider>,
    response_store: Arc<dyn ResponseStore>,
    priorities: Arc<dyn PrioritiesProvider>,
}

impl RecommendTasksHandler {
    pub fn new(
        question_bank: Arc<dyn QuestionBankProvider>,
        response_store: Arc<dyn ResponseStore>,
        priorities: Arc<dyn PrioritiesProvider>,
    ) -> Self {
        Self {
            question_bank,
            response_store,
            priorities,
        }
    }

    pub async fn handle(
        &self,
        query: RecommendTasksQuery,
    ) -> Result<RecommendTasksResult, DomainError> {
        let questions = self.question_bank.load_questions().await?;
        let responses = self
            .response_store
            .get_responses(query.family_id, query.period)
            .await?;
        let priorities = self.priorities.get_priorities(query.family_id).await?;

        let recommendations =
            TaskRecommender::recommend(&questions, &responses, &priorities, query.limit);
        info!(
            family_id = %query.family_id,
            period = %query.period,
            count = recommendations.len(),
            "Recommended tasks"
        );
        Ok(recommendations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryHouseholdStore;
    use crate::domain::foundation::{Assignee, Category, QuestionId};
    use crate::domain::survey::{FamilyPriorities, Question, ResponseMap};

    fn qid(id: &str) -> QuestionId {
        QuestionId::new(id).unwrap()
    }

    #[tokio::test]
    async fn recommends_from_stored_answers() {
        let store = Arc::new(InMemoryHouseholdStore::with_questions(vec![
            Question::new(qid("meals"), "Who plans meals?", Category::InvisibleHousehold),
            Question::new(qid("bills"), "Who pays bills?", Category::InvisibleHousehold),
        ]));
        let family_id = FamilyId::new();
        store.register_family(family_id, FamilyPriorities::neutral()).await;
        store
            .save_responses(
                family_id,
                Period::Week(2),
                &ResponseMap::new()
                    .with(qid("meals"), Assignee::A)
                    .with(qid("bills"), Assignee::A),
            )
            .await
            .unwrap();

        let handler = RecommendTasksHandler::new(store.clone(), store.clone(), store);
        let recs = handler
            .handle(RecommendTasksQuery { family_id, period: Period::Week(2), limit: 5 })
            .await
            .unwrap();

        assert_eq!(recs.len(), 2);
        assert!(recs.iter().all(|r| r.suggested_assignee == Assignee::B));
    }

    #[tokio::test]
    async fn unanswered_period_has_no_recommendations() {
        let store = Arc::new(InMemoryHouseholdStore::with_questions(vec![Question::new(
            qid("meals"),
            "Who plans meals?",
            Category::InvisibleHousehold,
        )]));
        let family_id = FamilyId::new();
        store.register_family(family_id, FamilyPriorities::neutral()).await;

        let handler = RecommendTasksHandler::new(store.clone(), store.clone(), store);
        let recs = handler
            .handle(RecommendTasksQuery { family_id, period: Period::Initial, limit: 5 })
            .await
            .unwrap();

        assert!(recs.is_empty());
    }
}
