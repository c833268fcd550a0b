//! Adaptive Question Sampler - bounded question sets for weekly check-ins.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::seed::variety_seed;
use crate::domain::foundation::{Category, Period};
use crate::domain::survey::{FamilyPriorities, Question};
use crate::domain::weighting::WeightCalculator;

/// How many questions to draw per category, and how many of those are
/// the heaviest questions taken unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplerSettings {
    pub count_per_category: usize,
    pub high_weight_count: usize,
}

impl SamplerSettings {
    pub const DEFAULT_COUNT_PER_CATEGORY: usize = 5;
    pub const DEFAULT_HIGH_WEIGHT_COUNT: usize = 3;

    pub fn new(count_per_category: usize, high_weight_count: usize) -> Self {
        Self {
            count_per_category,
            high_weight_count,
        }
    }

    /// High-weight picks, clamped so they never exceed the per-category count.
    pub fn effective_high_weight_count(&self) -> usize {
        self.high_weight_count.min(self.count_per_category)
    }

    /// Variety picks per category.
    pub fn variety_count(&self) -> usize {
        self.count_per_category - self.effective_high_weight_count()
    }
}

impl Default for SamplerSettings {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_COUNT_PER_CATEGORY,
            Self::DEFAULT_HIGH_WEIGHT_COUNT,
        )
    }
}

/// Selects a representative, reproducible subset of the question bank.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuestionSampler {
    settings: SamplerSettings,
}

impl QuestionSampler {
    pub fn new(settings: SamplerSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> SamplerSettings {
        self.settings
    }

    /// Samples questions for `period`.
    ///
    /// Per category (canonical order): the heaviest questions first, then
    /// variety picks drawn from the rest with a seed derived from `period`.
    /// Variety picks keep their weight order. Without `priorities` the
    /// questions are weighed under neutral priorities.
    ///
    /// # Edge Cases
    /// - Category with fewer questions than requested: all of them are returned
    /// - `high_weight_count > count_per_category`: clamped
    /// - Equal weights: ordered by question id
    pub fn sample(
        &self,
        bank: &[Question],
        period: Period,
        priorities: Option<&FamilyPriorities>,
    ) -> Vec<Question> {
        let priorities = priorities.copied().unwrap_or_else(FamilyPriorities::neutral);
        let high_count = self.settings.effective_high_weight_count();
        let variety_count = self.settings.variety_count();

        let mut sampled = Vec::with_capacity(
            Category::all()
                .len()
                .saturating_mul(self.settings.count_per_category)
                .min(bank.len()),
        );

        for category in Category::all() {
            let mut ranked: Vec<(&Question, f64)> = bank
                .iter()
                .filter(|q| q.category() == *category)
                .map(|q| (q, WeightCalculator::compute(q, &priorities)))
                .collect();
            ranked.sort_by(|(qa, wa), (qb, wb)| wb.total_cmp(wa).then_with(|| qa.id().cmp(qb.id())));

            let (top, rest) = ranked.split_at(high_count.min(ranked.len()));
            let take = variety_count.min(rest.len());

            let mut rng = StdRng::seed_from_u64(variety_seed(period, *category));
            let mut picks = rand::seq::index::sample(&mut rng, rest.len(), take).into_vec();
            picks.sort_unstable();

            debug!(
                period = %period,
                category = %category,
                available = ranked.len(),
                high_weight = top.len(),
                variety = picks.len(),
                "Sampled check-in questions"
            );

            sampled.extend(top.iter().map(|(q, _)| (*q).clone()));
            sampled.extend(picks.into_iter().map(|idx| rest[idx].0.clone()));
        }

        sampled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::QuestionId;
    use crate::domain::survey::BaseWeight;
    use std::collections::HashSet;

    /// Ten questions per category; base weight cycles 1..=5.
    fn bank() -> Vec<Question> {
        let mut questions = Vec::new();
        for category in Category::all() {
            for n in 0..10u8 {
                let id = format!("{}-{:02}", category.order_index(), n);
                questions.push(
                    Question::new(QuestionId::new(id).unwrap(), "", *category)
                        .with_base_weight(BaseWeight::new(n % 5 + 1)),
                );
            }
        }
        questions
    }

    fn ids(questions: &[Question]) -> Vec<String> {
        questions.iter().map(|q| q.id().to_string()).collect()
    }

    #[test]
    fn default_settings_draw_five_per_category() {
        let sampled = QuestionSampler::default().sample(&bank(), Period::Week(1), None);
        assert_eq!(sampled.len(), 20);
        for category in Category::all() {
            assert_eq!(sampled.iter().filter(|q| q.category() == *category).count(), 5);
        }
    }

    #[test]
    fn output_groups_categories_in_canonical_order() {
        let sampled = QuestionSampler::default().sample(&bank(), Period::Week(1), None);
        let order: Vec<Category> = sampled.iter().map(|q| q.category()).collect();
        let mut sorted = order.clone();
        sorted.sort_by_key(|c| c.order_index());
        assert_eq!(order, sorted);
    }

    #[test]
    fn heaviest_questions_lead_each_category() {
        let sampled = QuestionSampler::default().sample(&bank(), Period::Week(2), None);
        // Base weight 5 appears at n = 4 and n = 9; then 4 at n = 3.
        assert_eq!(ids(&sampled[..3]), vec!["0-04", "0-09", "0-03"]);
    }

    #[test]
    fn same_period_is_reproducible() {
        let sampler = QuestionSampler::default();
        let first = sampler.sample(&bank(), Period::Week(7), None);
        let second = sampler.sample(&bank(), Period::Week(7), None);
        assert_eq!(first, second);
    }

    #[test]
    fn different_periods_vary_the_picks() {
        let sampler = QuestionSampler::default();
        let variety: HashSet<Vec<String>> = (1..=8)
            .map(|week| ids(&sampler.sample(&bank(), Period::Week(week), None)))
            .collect();
        assert!(variety.len() > 1);
    }

    #[test]
    fn high_weight_count_is_clamped() {
        let sampler = QuestionSampler::new(SamplerSettings::new(2, 6));
        let sampled = sampler.sample(&bank(), Period::Initial, None);
        assert_eq!(sampled.len(), 8);
        assert_eq!(ids(&sampled[..2]), vec!["0-04", "0-09"]);
    }

    #[test]
    fn small_categories_return_everything() {
        let bank: Vec<Question> = bank()
            .into_iter()
            .filter(|q| q.category() != Category::VisibleParental || q.id().as_str() < "2-02")
            .collect();
        let sampled = QuestionSampler::default().sample(&bank, Period::Week(1), None);
        assert_eq!(
            sampled.iter().filter(|q| q.category() == Category::VisibleParental).count(),
            2
        );
    }

    #[test]
    fn priorities_do_not_reorder_within_a_category() {
        let priorities = FamilyPriorities::new(Some(Category::InvisibleParental), None, None);
        let sampler = QuestionSampler::default();
        let with = sampler.sample(&bank(), Period::Week(3), Some(&priorities));
        let without = sampler.sample(&bank(), Period::Week(3), None);
        assert_eq!(with, without);
    }

    #[test]
    fn no_duplicates_in_sample() {
        let sampled = QuestionSampler::default().sample(&bank(), Period::Week(5), None);
        let unique: HashSet<String> = ids(&sampled).into_iter().collect();
        assert_eq!(unique.len(), sampled.len());
    }

    #[test]
    fn huge_counts_return_the_whole_bank() {
        let bank = vec![Question::new(
            QuestionId::new("only").unwrap(),
            "Who walks the dog?",
            Category::VisibleHousehold,
        )];

        for count in [usize::MAX / 2, 1 << 60, usize::MAX] {
            let sampled = QuestionSampler::new(SamplerSettings::new(count, 3))
                .sample(&bank, Period::Week(1), None);
            assert_eq!(ids(&sampled), vec!["only".to_string()]);
        }
    }
}
