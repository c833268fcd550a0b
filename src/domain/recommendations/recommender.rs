//! Task Recommender - suggests which tasks to hand over to rebalance load.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

use crate::domain::balance::{BalanceAggregator, CategoryBalance};
use crate::domain::foundation::{Assignee, Category, QuestionId};
use crate::domain::history::is_good_balance;
use crate::domain::survey::{FamilyPriorities, Question, ResponseMap};
use crate::domain::weighting::WeightCalculator;

/// A suggestion to move one task from the overloaded party to the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecommendation {
    pub question_id: QuestionId,
    pub task: String,
    pub category: Category,
    pub weight: f64,
    pub current_assignee: Assignee,
    pub suggested_assignee: Assignee,
    /// Imbalance of the task's category when the recommendation was made.
    pub category_imbalance: f64,
}

/// Recommender for rebalancing tasks.
pub struct TaskRecommender;

impl TaskRecommender {
    /// Recommends up to `limit` tasks to hand over.
    ///
    /// Only categories outside good balance (`|a − 50| ≥ 10`) contribute.
    /// Within them, answered tasks held by the party carrying more load are
    /// proposed for the other party. Ordered by category imbalance
    /// (largest first, canonical order on ties), then task weight (heaviest
    /// first), then question id.
    pub fn recommend(
        questions: &[Question],
        responses: &ResponseMap,
        priorities: &FamilyPriorities,
        limit: usize,
    ) -> Vec<TaskRecommendation> {
        let balance = BalanceAggregator::aggregate(questions, responses, priorities);
        let mut seen: HashSet<&QuestionId> = HashSet::new();

        let mut recommendations: Vec<TaskRecommendation> = questions
            .iter()
            .filter_map(|question| {
                if !seen.insert(question.id()) {
                    return None;
                }
                let assignee = responses.get(question.id())?;
                let category_balance = balance.category(question.category());
                let overloaded = Self::overloaded_party(&category_balance)?;
                if assignee != overloaded {
                    return None;
                }

                Some(TaskRecommendation {
                    question_id: question.id().clone(),
                    task: question.text().to_string(),
                    category: question.category(),
                    weight: WeightCalculator::compute(question, priorities),
                    current_assignee: assignee,
                    suggested_assignee: assignee.other(),
                    category_imbalance: category_balance.imbalance.value(),
                })
            })
            .collect();

        recommendations.sort_by(Self::compare);
        recommendations.truncate(limit);
        recommendations
    }

    /// Party to take load from, or None when the category is well balanced.
    fn overloaded_party(balance: &CategoryBalance) -> Option<Assignee> {
        let share = balance.share();
        if is_good_balance(share) {
            return None;
        }
        share.heavier_party()
    }

    fn compare(left: &TaskRecommendation, right: &TaskRecommendation) -> Ordering {
        right
            .category_imbalance
            .total_cmp(&left.category_imbalance)
            .then_with(|| left.category.order_index().cmp(&right.category.order_index()))
            .then_with(|| right.weight.total_cmp(&left.weight))
            .then_with(|| left.question_id.cmp(&right.question_id))
    }
}
