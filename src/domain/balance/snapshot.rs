//! BalanceSnapshot - immutable, period-labeled balance record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::shares::{CategoryBalance, PartyShare};
use crate::domain::foundation::{Category, Period};

/// Balance results for one survey period.
///
/// Always carries all four categories. Created once per period and never
/// mutated; re-running a period produces a new snapshot that replaces it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SnapshotRecord")]
pub struct BalanceSnapshot {
    period: Period,
    overall: PartyShare,
    categories: BTreeMap<Category, CategoryBalance>,
}

impl BalanceSnapshot {
    /// Creates a snapshot. Categories absent from `categories` are neutral.
    pub fn new(
        period: Period,
        overall: PartyShare,
        mut categories: BTreeMap<Category, CategoryBalance>,
    ) -> Self {
        for category in Category::all() {
            categories.entry(*category).or_default();
        }
        Self {
            period,
            overall,
            categories,
        }
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn overall(&self) -> PartyShare {
        self.overall
    }

    /// Balance of one category.
    pub fn category(&self, category: Category) -> CategoryBalance {
        self.categories.get(&category).copied().unwrap_or_default()
    }

    /// All categories in canonical order.
    pub fn categories(&self) -> impl Iterator<Item = (Category, CategoryBalance)> + '_ {
        self.categories.iter().map(|(c, b)| (*c, *b))
    }
}

/// Stored form; deserialization goes through `BalanceSnapshot::new`.
#[derive(Deserialize)]
struct SnapshotRecord {
    period: Period,
    overall: PartyShare,
    #[serde(default)]
    categories: BTreeMap<Category, CategoryBalance>,
}

impl From<SnapshotRecord> for BalanceSnapshot {
    fn from(record: SnapshotRecord) -> Self {
        BalanceSnapshot::new(record.period, record.overall, record.categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_missing_categories_with_neutral_balance() {
        let mut categories = BTreeMap::new();
        categories.insert(
            Category::VisibleHousehold,
            CategoryBalance::from_share(PartyShare::from_totals(1.0, 0.0)),
        );

        let snapshot = BalanceSnapshot::new(Period::Initial, PartyShare::NEUTRAL, categories);

        assert_eq!(snapshot.categories().count(), 4);
        assert_eq!(snapshot.category(Category::VisibleHousehold).a.value(), 100.0);
        assert_eq!(snapshot.category(Category::InvisibleParental), CategoryBalance::NEUTRAL);
    }

    #[test]
    fn categories_iterate_in_canonical_order() {
        let snapshot = BalanceSnapshot::new(Period::Week(1), PartyShare::NEUTRAL, BTreeMap::new());
        let order: Vec<Category> = snapshot.categories().map(|(c, _)| c).collect();
        assert_eq!(order, Category::all().to_vec());
    }

    #[test]
    fn serializes_period_and_categories() {
        let snapshot = BalanceSnapshot::new(Period::Week(2), PartyShare::NEUTRAL, BTreeMap::new());
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["period"], 2);
        assert_eq!(json["overall"]["a"], 50.0);
        assert_eq!(json["categories"]["invisible_household"]["imbalance"], 0.0);
    }

    #[test]
    fn deserializing_backfills_missing_categories() {
        let json = r#"{
            "period": 3,
            "overall": {"a": 60.0, "b": 40.0},
            "categories": {"visible_parental": {"a": 60.0, "b": 40.0, "imbalance": 20.0}}
        }"#;

        let snapshot: BalanceSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.categories().count(), 4);
        assert_eq!(snapshot.category(Category::VisibleParental).imbalance.value(), 20.0);
        assert_eq!(snapshot.category(Category::InvisibleHousehold), CategoryBalance::NEUTRAL);
    }

    #[test]
    fn deserializing_without_categories_is_all_neutral() {
        let snapshot: BalanceSnapshot =
            serde_json::from_str(r#"{"period": "initial", "overall": {"a": 50.0, "b": 50.0}}"#).unwrap();
        assert!(snapshot.categories().all(|(_, balance)| balance == CategoryBalance::NEUTRAL));
    }
}
