//! Weight Calculator - converts a question's attributes into a load weight.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::multipliers::{priority_multiplier, Multiplier};
use crate::domain::foundation::QuestionId;
use crate::domain::survey::{
    ChildDevelopment, EmotionalLabor, FamilyPriorities, Frequency, Invisibility, Question,
    ResearchImpact,
};

/// Every factor that went into a question's weight.
///
/// Presentation code reads this to explain a weight; `total` is the same
/// value `WeightCalculator::compute` returns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightBreakdown {
    pub base: f64,
    pub frequency: f64,
    pub invisibility: f64,
    pub emotional_labor: f64,
    pub research_impact: f64,
    pub child_development: f64,
    pub priority: f64,
    pub total: f64,
}

/// Calculator for question weights.
pub struct WeightCalculator;

impl WeightCalculator {
    /// Computes the weight of `question` under `priorities`.
    ///
    /// `base × frequency × invisibility × emotional labor × research impact
    /// × child development × priority`, multiplied in that order so the
    /// result is reproducible bit for bit.
    pub fn compute(question: &Question, priorities: &FamilyPriorities) -> f64 {
        Self::breakdown(question, priorities).total
    }

    /// Computes the weight together with each contributing factor.
    pub fn breakdown(question: &Question, priorities: &FamilyPriorities) -> WeightBreakdown {
        let base = question.base_weight().value();
        let frequency = Frequency::multiplier_or_default(question.frequency());
        let invisibility = Invisibility::multiplier_or_default(question.invisibility());
        let emotional_labor = EmotionalLabor::multiplier_or_default(question.emotional_labor());
        let research_impact = ResearchImpact::multiplier_or_default(question.research_impact());
        let child_development =
            ChildDevelopment::multiplier_or_default(question.child_development());
        let priority = priority_multiplier(priorities.rank_of(question.category()));

        let total = base
            * frequency
            * invisibility
            * emotional_labor
            * research_impact
            * child_development
            * priority;

        WeightBreakdown {
            base,
            frequency,
            invisibility,
            emotional_labor,
            research_impact,
            child_development,
            priority,
            total,
        }
    }

    /// Weighs every question once for a single priorities snapshot.
    pub fn weigh_all(
        questions: &[Question],
        priorities: &FamilyPriorities,
    ) -> HashMap<QuestionId, f64> {
        questions
            .iter()
            .map(|q| (q.id().clone(), Self::compute(q, priorities)))
            .collect()
    }
}
