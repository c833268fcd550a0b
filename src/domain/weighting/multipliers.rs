//! Fixed multiplier tables for the weight model.

use crate::domain::survey::{
    ChildDevelopment, EmotionalLabor, Frequency, Invisibility, PriorityRank, ResearchImpact,
};

/// An attribute that scales a question's base weight.
pub trait Multiplier: Copy {
    /// Value substituted when a question leaves the attribute unset.
    const DEFAULT: Self;

    /// The fixed multiplier for this value.
    fn multiplier(&self) -> f64;

    /// Multiplier for an optional attribute, falling back to `DEFAULT`.
    fn multiplier_or_default(value: Option<Self>) -> f64 {
        value.unwrap_or(Self::DEFAULT).multiplier()
    }
}

impl Multiplier for Frequency {
    const DEFAULT: Self = Frequency::Weekly;

    fn multiplier(&self) -> f64 {
        match self {
            Frequency::Daily => 1.5,
            Frequency::SeveralWeekly => 1.3,
            Frequency::Weekly => 1.2,
            Frequency::Monthly => 1.0,
            Frequency::Quarterly => 0.8,
        }
    }
}

impl Multiplier for Invisibility {
    const DEFAULT: Self = Invisibility::PartiallyVisible;

    fn multiplier(&self) -> f64 {
        match self {
            Invisibility::HighlyVisible => 1.0,
            Invisibility::PartiallyVisible => 1.2,
            Invisibility::MostlyInvisible => 1.35,
            Invisibility::CompletelyInvisible => 1.5,
        }
    }
}

impl Multiplier for EmotionalLabor {
    const DEFAULT: Self = EmotionalLabor::Minimal;

    fn multiplier(&self) -> f64 {
        match self {
            EmotionalLabor::Minimal => 1.0,
            EmotionalLabor::Low => 1.1,
            EmotionalLabor::Moderate => 1.2,
            EmotionalLabor::High => 1.3,
            EmotionalLabor::Extreme => 1.4,
        }
    }
}

impl Multiplier for ResearchImpact {
    const DEFAULT: Self = ResearchImpact::StandardImpact;

    fn multiplier(&self) -> f64 {
        match self {
            ResearchImpact::HighImpact => 1.3,
            ResearchImpact::MediumImpact => 1.15,
            ResearchImpact::StandardImpact => 1.0,
        }
    }
}

impl Multiplier for ChildDevelopment {
    const DEFAULT: Self = ChildDevelopment::LimitedImpact;

    fn multiplier(&self) -> f64 {
        match self {
            ChildDevelopment::HighImpact => 1.25,
            ChildDevelopment::ModerateImpact => 1.15,
            ChildDevelopment::LimitedImpact => 1.0,
        }
    }
}

/// Multiplier applied to questions in a prioritized category.
pub fn priority_multiplier(rank: Option<PriorityRank>) -> f64 {
    match rank {
        Some(PriorityRank::Highest) => 1.5,
        Some(PriorityRank::Secondary) => 1.3,
        Some(PriorityRank::Tertiary) => 1.1,
        None => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strictly_increasing<T: Multiplier>(values: &[T]) -> bool {
        values
            .windows(2)
            .all(|pair| pair[0].multiplier() < pair[1].multiplier())
    }

    #[test]
    fn tables_increase_with_tier() {
        assert!(strictly_increasing(Frequency::all()));
        assert!(strictly_increasing(Invisibility::all()));
        assert!(strictly_increasing(EmotionalLabor::all()));
        assert!(strictly_increasing(ResearchImpact::all()));
        assert!(strictly_increasing(ChildDevelopment::all()));
    }

    #[test]
    fn missing_attribute_uses_documented_default() {
        assert_eq!(Frequency::multiplier_or_default(None), 1.2);
        assert_eq!(Invisibility::multiplier_or_default(None), 1.2);
        assert_eq!(EmotionalLabor::multiplier_or_default(None), 1.0);
        assert_eq!(ResearchImpact::multiplier_or_default(None), 1.0);
        assert_eq!(ChildDevelopment::multiplier_or_default(None), 1.0);
    }

    #[test]
    fn present_attribute_ignores_default() {
        assert_eq!(Frequency::multiplier_or_default(Some(Frequency::Daily)), 1.5);
        assert_eq!(
            Invisibility::multiplier_or_default(Some(Invisibility::CompletelyInvisible)),
            1.5
        );
    }

    #[test]
    fn priority_multiplier_by_rank() {
        assert_eq!(priority_multiplier(Some(PriorityRank::Highest)), 1.5);
        assert_eq!(priority_multiplier(Some(PriorityRank::Secondary)), 1.3);
        assert_eq!(priority_multiplier(Some(PriorityRank::Tertiary)), 1.1);
        assert_eq!(priority_multiplier(None), 1.0);
    }
}
