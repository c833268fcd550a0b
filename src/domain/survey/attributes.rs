//! Weight attributes carried by every question.
//!
//! Each attribute parses leniently from the question bank's vocabulary:
//! case, spacing and punctuation are ignored, and the short forms used by
//! the bank (`"several"`, `"highly"`, `"standard"`) are accepted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Lowercases and strips everything but ASCII alphanumerics.
fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

macro_rules! lenient_attribute {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $($variant:ident => [$($alias:literal),+ $(,)?]),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case", try_from = "String")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Returns every value, lowest tier first.
            pub fn all() -> &'static [$name] {
                &[$($name::$variant),+]
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                match normalize(raw).as_str() {
                    $($($alias)|+ => Ok($name::$variant),)+
                    _ => Err(ValidationError::invalid_format(
                        $field,
                        format!("unrecognized value \"{}\"", raw),
                    )),
                }
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                value.parse()
            }
        }
    };
}

lenient_attribute! {
    /// How often the task comes around.
    Frequency, "frequency" {
        Quarterly => ["quarterly"],
        Monthly => ["monthly"],
        Weekly => ["weekly"],
        SeveralWeekly => ["several", "severalweekly", "severaltimesweekly", "severaltimesaweek"],
        Daily => ["daily"],
    }
}

lenient_attribute! {
    /// How visible the task is to the rest of the household.
    Invisibility, "invisibility" {
        HighlyVisible => ["highly", "highlyvisible"],
        PartiallyVisible => ["partially", "partiallyvisible"],
        MostlyInvisible => ["mostly", "mostlyinvisible"],
        CompletelyInvisible => ["completely", "completelyinvisible"],
    }
}

lenient_attribute! {
    /// Emotional labor the task demands.
    EmotionalLabor, "emotional_labor" {
        Minimal => ["minimal"],
        Low => ["low"],
        Moderate => ["moderate"],
        High => ["high"],
        Extreme => ["extreme"],
    }
}

lenient_attribute! {
    /// Research-backed impact on relationship satisfaction.
    ResearchImpact, "research_impact" {
        StandardImpact => ["standard", "standardimpact"],
        MediumImpact => ["medium", "mediumimpact"],
        HighImpact => ["high", "highimpact"],
    }
}

lenient_attribute! {
    /// Influence of the task on child development.
    ChildDevelopment, "child_development" {
        LimitedImpact => ["limited", "limitedimpact"],
        ModerateImpact => ["moderate", "moderateimpact"],
        HighImpact => ["high", "highimpact"],
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Frequency::Daily => "Daily",
            Frequency::SeveralWeekly => "Several times weekly",
            Frequency::Weekly => "Weekly",
            Frequency::Monthly => "Monthly",
            Frequency::Quarterly => "Quarterly",
        };
        write!(f, "{}", label)
    }
}

/// Time and cognitive-load tier of a task, 1 (light) to 5 (heavy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BaseWeight(u8);

impl BaseWeight {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Creates a BaseWeight, clamping into 1-5.
    pub fn new(value: u8) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    /// Creates a BaseWeight from a possibly fractional number.
    ///
    /// Non-finite input falls back to the default tier.
    pub fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return Self::default();
        }
        Self(value.round().clamp(f64::from(Self::MIN), f64::from(Self::MAX)) as u8)
    }

    /// Returns the tier as a float for weight math.
    pub fn value(&self) -> f64 {
        f64::from(self.0)
    }

    /// Returns the raw tier.
    pub fn tier(&self) -> u8 {
        self.0
    }
}

impl Default for BaseWeight {
    fn default() -> Self {
        Self(Self::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_accepts_bank_short_forms() {
        assert_eq!("several".parse::<Frequency>().unwrap(), Frequency::SeveralWeekly);
        assert_eq!("Daily".parse::<Frequency>().unwrap(), Frequency::Daily);
        assert_eq!("several_weekly".parse::<Frequency>().unwrap(), Frequency::SeveralWeekly);
    }

    #[test]
    fn invisibility_ignores_case_and_punctuation() {
        assert_eq!(
            "Completely Invisible".parse::<Invisibility>().unwrap(),
            Invisibility::CompletelyInvisible
        );
        assert_eq!("mostly".parse::<Invisibility>().unwrap(), Invisibility::MostlyInvisible);
    }

    #[test]
    fn unknown_value_is_a_format_error() {
        match "fortnightly".parse::<Frequency>() {
            Err(ValidationError::InvalidFormat { field, .. }) => assert_eq!(field, "frequency"),
            other => panic!("Expected InvalidFormat error, got {:?}", other),
        }
    }

    #[test]
    fn impact_enums_share_short_forms() {
        assert_eq!("high".parse::<ResearchImpact>().unwrap(), ResearchImpact::HighImpact);
        assert_eq!("high".parse::<ChildDevelopment>().unwrap(), ChildDevelopment::HighImpact);
        assert_eq!("standard".parse::<ResearchImpact>().unwrap(), ResearchImpact::StandardImpact);
    }

    #[test]
    fn all_lists_tiers_lowest_first() {
        assert_eq!(EmotionalLabor::all().first(), Some(&EmotionalLabor::Minimal));
        assert_eq!(EmotionalLabor::all().last(), Some(&EmotionalLabor::Extreme));
        assert_eq!(Frequency::all().len(), 5);
    }

    #[test]
    fn serializes_snake_case_and_reads_it_back() {
        let json = serde_json::to_string(&EmotionalLabor::Moderate).unwrap();
        assert_eq!(json, "\"moderate\"");
        let parsed: Invisibility = serde_json::from_str("\"partially_visible\"").unwrap();
        assert_eq!(parsed, Invisibility::PartiallyVisible);
    }

    #[test]
    fn base_weight_clamps_into_range() {
        assert_eq!(BaseWeight::new(0).tier(), 1);
        assert_eq!(BaseWeight::new(9).tier(), 5);
        assert_eq!(BaseWeight::from_f64(3.6).tier(), 4);
        assert_eq!(BaseWeight::from_f64(f64::NAN), BaseWeight::default());
    }
}
