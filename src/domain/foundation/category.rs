//! Category enum representing the four household-task buckets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four task categories. Closed set; `all()` is the canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[serde(alias = "Visible Household Tasks", alias = "Visible Household")]
    VisibleHousehold,
    #[serde(alias = "Invisible Household Tasks", alias = "Invisible Household")]
    InvisibleHousehold,
    #[serde(alias = "Visible Parental Tasks", alias = "Visible Parental")]
    VisibleParental,
    #[serde(alias = "Invisible Parental Tasks", alias = "Invisible Parental")]
    InvisibleParental,
}

impl Category {
    /// Returns all categories in canonical order.
    pub fn all() -> &'static [Category] {
        &[
            Category::VisibleHousehold,
            Category::InvisibleHousehold,
            Category::VisibleParental,
            Category::InvisibleParental,
        ]
    }

    /// Returns the 0-based index of this category in the canonical order.
    pub fn order_index(&self) -> usize {
        match self {
            Category::VisibleHousehold => 0,
            Category::InvisibleHousehold => 1,
            Category::VisibleParental => 2,
            Category::InvisibleParental => 3,
        }
    }

    /// Returns the display name used by the question bank.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::VisibleHousehold => "Visible Household Tasks",
            Category::InvisibleHousehold => "Invisible Household Tasks",
            Category::VisibleParental => "Visible Parental Tasks",
            Category::InvisibleParental => "Invisible Parental Tasks",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
