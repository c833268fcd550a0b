//! FamilyPriorities - a family's ranked emphasis over categories.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Category;

/// Rank of a category within a family's priorities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityRank {
    Highest,
    Secondary,
    Tertiary,
}

/// Up to three prioritized categories.
///
/// The fields are expected to be distinct. When they are not, the first
/// matching field (highest, then secondary, then tertiary) decides the rank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FamilyPriorities {
    #[serde(default, alias = "highestPriority")]
    pub highest_priority: Option<Category>,
    #[serde(default, alias = "secondaryPriority")]
    pub secondary_priority: Option<Category>,
    #[serde(default, alias = "tertiaryPriority")]
    pub tertiary_priority: Option<Category>,
}

impl FamilyPriorities {
    /// Priorities that favor no category.
    pub const fn neutral() -> Self {
        Self {
            highest_priority: None,
            secondary_priority: None,
            tertiary_priority: None,
        }
    }

    /// Creates priorities from the three ranked slots.
    pub fn new(
        highest: Option<Category>,
        secondary: Option<Category>,
        tertiary: Option<Category>,
    ) -> Self {
        Self {
            highest_priority: highest,
            secondary_priority: secondary,
            tertiary_priority: tertiary,
        }
    }

    /// Returns the rank of `category`, first match wins.
    pub fn rank_of(&self, category: Category) -> Option<PriorityRank> {
        if self.highest_priority == Some(category) {
            Some(PriorityRank::Highest)
        } else if self.secondary_priority == Some(category) {
            Some(PriorityRank::Secondary)
        } else if self.tertiary_priority == Some(category) {
            Some(PriorityRank::Tertiary)
        } else {
            None
        }
    }

    /// Returns true if the same category fills more than one slot.
    pub fn has_duplicates(&self) -> bool {
        let slots = [self.highest_priority, self.secondary_priority, self.tertiary_priority];
        slots.iter().enumerate().any(|(i, slot)| {
            slot.is_some() && slots[i + 1..].iter().any(|other| other == slot)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_ranks_nothing() {
        let priorities = FamilyPriorities::neutral();
        for category in Category::all() {
            assert_eq!(priorities.rank_of(*category), None);
        }
    }

    #[test]
    fn rank_of_reports_each_slot() {
        let priorities = FamilyPriorities::new(
            Some(Category::InvisibleParental),
            Some(Category::VisibleParental),
            Some(Category::InvisibleHousehold),
        );
        assert_eq!(priorities.rank_of(Category::InvisibleParental), Some(PriorityRank::Highest));
        assert_eq!(priorities.rank_of(Category::VisibleParental), Some(PriorityRank::Secondary));
        assert_eq!(priorities.rank_of(Category::InvisibleHousehold), Some(PriorityRank::Tertiary));
        assert_eq!(priorities.rank_of(Category::VisibleHousehold), None);
    }

    #[test]
    fn duplicate_slots_resolve_to_first_match() {
        let priorities = FamilyPriorities::new(
            Some(Category::VisibleHousehold),
            Some(Category::VisibleHousehold),
            None,
        );
        assert!(priorities.has_duplicates());
        assert_eq!(priorities.rank_of(Category::VisibleHousehold), Some(PriorityRank::Highest));
    }

    #[test]
    fn empty_slots_are_not_duplicates() {
        assert!(!FamilyPriorities::neutral().has_duplicates());
    }

    #[test]
    fn deserializes_camel_case_fields() {
        let json = r#"{"highestPriority": "Invisible Household Tasks"}"#;
        let priorities: FamilyPriorities = serde_json::from_str(json).unwrap();
        assert_eq!(priorities.highest_priority, Some(Category::InvisibleHousehold));
        assert_eq!(priorities.secondary_priority, None);
    }
}
