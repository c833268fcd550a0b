//! Balance Aggregator - weighted balance from a period's responses.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

use super::shares::{CategoryBalance, PartyShare, Tally};
use super::snapshot::BalanceSnapshot;
use crate::domain::foundation::{Category, Period, QuestionId};
use crate::domain::survey::{FamilyPriorities, Question, ResponseMap};
use crate::domain::weighting::WeightCalculator;

/// Numeric content of one period's balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceResult {
    pub overall: PartyShare,
    pub categories: BTreeMap<Category, CategoryBalance>,
    /// Responses that matched a question and contributed weight.
    pub answered: usize,
    /// Responses whose question id is not in the question set.
    pub ignored: usize,
}

impl BalanceResult {
    /// Balance of one category.
    pub fn category(&self, category: Category) -> CategoryBalance {
        self.categories.get(&category).copied().unwrap_or_default()
    }

    /// Labels this result with its period.
    pub fn into_snapshot(self, period: Period) -> BalanceSnapshot {
        BalanceSnapshot::new(period, self.overall, self.categories)
    }
}

/// Aggregator for weighted household balance.
pub struct BalanceAggregator;

impl BalanceAggregator {
    /// Aggregates `responses` into overall and per-category balance.
    ///
    /// # Edge Cases
    /// - Response for an unknown question id: skipped and counted in `ignored`
    /// - No weight overall or in a category: neutral 50/50 split
    /// - Duplicate question ids in `questions`: the first occurrence is used
    pub fn aggregate(
        questions: &[Question],
        responses: &ResponseMap,
        priorities: &FamilyPriorities,
    ) -> BalanceResult {
        if priorities.has_duplicates() {
            debug!(?priorities, "Category fills several priority slots; first slot wins");
        }

        let mut by_id: HashMap<&QuestionId, &Question> = HashMap::with_capacity(questions.len());
        for question in questions {
            by_id.entry(question.id()).or_insert(question);
        }

        let mut overall = Tally::default();
        let mut per_category: BTreeMap<Category, Tally> = Category::all()
            .iter()
            .map(|category| (*category, Tally::default()))
            .collect();
        let mut answered = 0;
        let mut ignored = 0;

        for (question_id, assignee) in responses.iter() {
            let Some(question) = by_id.get(question_id) else {
                ignored += 1;
                continue;
            };

            let weight = WeightCalculator::compute(question, priorities);
            overall.add(assignee, weight);
            per_category
                .entry(question.category())
                .or_default()
                .add(assignee, weight);
            answered += 1;
        }

        debug!(
            answered,
            ignored,
            total_weight = overall.total(),
            "Aggregated household balance"
        );

        BalanceResult {
            overall: overall.share(),
            categories: per_category
                .into_iter()
                .map(|(category, tally)| (category, CategoryBalance::from_share(tally.share())))
                .collect(),
            answered,
            ignored,
        }
    }

    /// Aggregates and labels the result with `period`.
    pub fn snapshot(
        period: Period,
        questions: &[Question],
        responses: &ResponseMap,
        priorities: &FamilyPriorities,
    ) -> BalanceSnapshot {
        Self::aggregate(questions, responses, priorities).into_snapshot(period)
    }
}
