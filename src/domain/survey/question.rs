//! Question entity - one survey item from the question bank.

use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;

use super::attributes::{
    BaseWeight, ChildDevelopment, EmotionalLabor, Frequency, Invisibility, ResearchImpact,
};
use crate::domain::foundation::{Category, QuestionId};

/// An immutable survey question and its weight attributes.
///
/// Enum attributes are optional: a value the bank leaves out, or spells in a
/// way no table recognizes, is kept as `None` and the weight calculator
/// substitutes that attribute's default multiplier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    #[serde(default)]
    text: String,
    category: Category,
    #[serde(default, alias = "baseWeight", deserialize_with = "lenient::base_weight")]
    base_weight: BaseWeight,
    #[serde(default, deserialize_with = "lenient::attribute")]
    frequency: Option<Frequency>,
    #[serde(default, deserialize_with = "lenient::attribute")]
    invisibility: Option<Invisibility>,
    #[serde(default, alias = "emotionalLabor", deserialize_with = "lenient::attribute")]
    emotional_labor: Option<EmotionalLabor>,
    #[serde(default, alias = "researchImpact", deserialize_with = "lenient::attribute")]
    research_impact: Option<ResearchImpact>,
    #[serde(default, alias = "childDevelopment", deserialize_with = "lenient::attribute")]
    child_development: Option<ChildDevelopment>,
}

impl Question {
    /// Creates a question with the default base weight and no enum attributes.
    pub fn new(id: QuestionId, text: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            text: text.into(),
            category,
            base_weight: BaseWeight::default(),
            frequency: None,
            invisibility: None,
            emotional_labor: None,
            research_impact: None,
            child_development: None,
        }
    }

    pub fn with_base_weight(mut self, base_weight: BaseWeight) -> Self {
        self.base_weight = base_weight;
        self
    }

    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    pub fn with_invisibility(mut self, invisibility: Invisibility) -> Self {
        self.invisibility = Some(invisibility);
        self
    }

    pub fn with_emotional_labor(mut self, emotional_labor: EmotionalLabor) -> Self {
        self.emotional_labor = Some(emotional_labor);
        self
    }

    pub fn with_research_impact(mut self, research_impact: ResearchImpact) -> Self {
        self.research_impact = Some(research_impact);
        self
    }

    pub fn with_child_development(mut self, child_development: ChildDevelopment) -> Self {
        self.child_development = Some(child_development);
        self
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn base_weight(&self) -> BaseWeight {
        self.base_weight
    }

    pub fn frequency(&self) -> Option<Frequency> {
        self.frequency
    }

    pub fn invisibility(&self) -> Option<Invisibility> {
        self.invisibility
    }

    pub fn emotional_labor(&self) -> Option<EmotionalLabor> {
        self.emotional_labor
    }

    pub fn research_impact(&self) -> Option<ResearchImpact> {
        self.research_impact
    }

    pub fn child_development(&self) -> Option<ChildDevelopment> {
        self.child_development
    }
}

mod lenient {
    use super::*;
    use serde::de::IgnoredAny;
    use tracing::warn;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Other(IgnoredAny),
    }

    pub(super) fn attribute<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::Text(text)) => match text.parse::<T>() {
                Ok(value) => Ok(Some(value)),
                Err(err) => {
                    warn!(error = %err, "Unrecognized question attribute, using default multiplier");
                    Ok(None)
                }
            },
            Some(Raw::Number(_)) | Some(Raw::Other(_)) => {
                warn!("Non-text question attribute, using default multiplier");
                Ok(None)
            }
            None => Ok(None),
        }
    }

    pub(super) fn base_weight<'de, D>(deserializer: D) -> Result<BaseWeight, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed = match Option::<Raw>::deserialize(deserializer)? {
            Some(Raw::Number(n)) => Some(n),
            Some(Raw::Text(text)) => text.trim().parse::<f64>().ok(),
            Some(Raw::Other(_)) | None => None,
        };
        match parsed {
            Some(n) => Ok(BaseWeight::from_f64(n)),
            None => {
                warn!("Missing or non-numeric base weight, using default tier");
                Ok(BaseWeight::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_question_has_default_attributes() {
        let q = Question::new(QuestionId::new("q1").unwrap(), "Who cooks?", Category::VisibleHousehold);
        assert_eq!(q.base_weight(), BaseWeight::default());
        assert!(q.frequency().is_none());
        assert!(q.child_development().is_none());
    }

    #[test]
    fn deserializes_bank_entry_with_camel_case_and_short_forms() {
        let json = r#"{
            "id": "q12",
            "text": "Who schedules doctor appointments?",
            "category": "Invisible Parental Tasks",
            "baseWeight": "4",
            "frequency": "monthly",
            "invisibility": "mostly",
            "emotionalLabor": "high",
            "researchImpact": "high",
            "childDevelopment": "moderate"
        }"#;

        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.id().as_str(), "q12");
        assert_eq!(q.category(), Category::InvisibleParental);
        assert_eq!(q.base_weight().tier(), 4);
        assert_eq!(q.frequency(), Some(Frequency::Monthly));
        assert_eq!(q.invisibility(), Some(Invisibility::MostlyInvisible));
        assert_eq!(q.emotional_labor(), Some(EmotionalLabor::High));
        assert_eq!(q.research_impact(), Some(ResearchImpact::HighImpact));
        assert_eq!(q.child_development(), Some(ChildDevelopment::ModerateImpact));
    }

    #[test]
    fn unknown_and_missing_attributes_become_none() {
        let json = r#"{
            "id": "q3",
            "category": "visible_household",
            "frequency": "fortnightly",
            "invisibility": 3
        }"#;

        let q: Question = serde_json::from_str(json).unwrap();
        assert!(q.frequency().is_none());
        assert!(q.invisibility().is_none());
        assert!(q.emotional_labor().is_none());
        assert_eq!(q.base_weight(), BaseWeight::default());
    }

    #[test]
    fn non_numeric_base_weight_falls_back_to_default() {
        let json = r#"{"id": "q4", "category": "visible_parental", "base_weight": "heavy"}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.base_weight(), BaseWeight::default());
    }

    #[test]
    fn out_of_range_base_weight_is_clamped() {
        let json = r#"{"id": "q5", "category": "visible_parental", "base_weight": 8}"#;
        let q: Question = serde_json::from_str(json).unwrap();
        assert_eq!(q.base_weight().tier(), 5);
    }

    #[test]
    fn empty_id_is_rejected() {
        let json = r#"{"id": "", "category": "visible_parental"}"#;
        assert!(serde_json::from_str::<Question>(json).is_err());
    }
}
