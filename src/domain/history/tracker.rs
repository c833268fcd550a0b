//! Historical Balance Tracker - period-ordered snapshot series.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::insights::{
    is_good_balance, most_imbalanced_category, BalanceShift, BalanceStatus, TrendDelta,
    TrendInsights,
};
use crate::domain::balance::{BalanceAggregator, BalanceSnapshot};
use crate::domain::foundation::Period;
use crate::domain::survey::{FamilyPriorities, Question, ResponseMap};

/// Ordered, one-per-period series of balance snapshots.
///
/// Every operation that adds a snapshot returns a new tracker; the
/// receiver is left untouched. Snapshots stay sorted by period no matter
/// the call order, and recording a period that already exists replaces
/// that period's snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<BalanceSnapshot>", into = "Vec<BalanceSnapshot>")]
pub struct HistoricalBalanceTracker {
    snapshots: Vec<BalanceSnapshot>,
}

impl HistoricalBalanceTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregates `responses` for `period` and returns the updated tracker.
    pub fn record_snapshot(
        &self,
        period: Period,
        questions: &[Question],
        responses: &ResponseMap,
        priorities: &FamilyPriorities,
    ) -> Self {
        let snapshot = BalanceAggregator::snapshot(period, questions, responses, priorities);
        self.with_snapshot(snapshot)
    }

    /// Returns a tracker that also holds `snapshot`.
    pub fn with_snapshot(&self, snapshot: BalanceSnapshot) -> Self {
        let mut next = self.clone();
        next.insert(snapshot);
        next
    }

    fn insert(&mut self, snapshot: BalanceSnapshot) {
        let period = snapshot.period();
        debug_assert_ne!(period, Period::Week(0), "weeks are numbered from 1");
        match self
            .snapshots
            .binary_search_by_key(&period, |existing| existing.period())
        {
            Ok(index) => {
                debug!(period = %period, "Replacing recorded snapshot");
                self.snapshots[index] = snapshot;
            }
            Err(index) => {
                if index < self.snapshots.len() {
                    debug!(period = %period, "Backfilling snapshot before later periods");
                }
                self.snapshots.insert(index, snapshot);
            }
        }
    }

    /// All snapshots ordered by period.
    pub fn trend(&self) -> &[BalanceSnapshot] {
        &self.snapshots
    }

    pub fn get(&self, period: Period) -> Option<&BalanceSnapshot> {
        self.snapshots
            .binary_search_by_key(&period, |s| s.period())
            .ok()
            .map(|index| &self.snapshots[index])
    }

    pub fn latest(&self) -> Option<&BalanceSnapshot> {
        self.snapshots.last()
    }

    /// The snapshot just before the latest one.
    pub fn previous(&self) -> Option<&BalanceSnapshot> {
        self.snapshots.len().checked_sub(2).map(|index| &self.snapshots[index])
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Overall change from the first to the last snapshot.
    ///
    /// Zero with fewer than two snapshots.
    pub fn trend_delta(&self) -> TrendDelta {
        match (self.snapshots.first(), self.snapshots.last()) {
            (Some(first), Some(last)) if self.snapshots.len() >= 2 => TrendDelta::between(first, last),
            _ => TrendDelta::default(),
        }
    }

    /// Change between the previous and the latest snapshot.
    pub fn latest_shift(&self) -> Option<BalanceShift> {
        match (self.previous(), self.latest()) {
            (Some(previous), Some(latest)) => Some(BalanceShift::between(previous, latest)),
            _ => None,
        }
    }

    /// Summary insights over the series, or None before the first snapshot.
    pub fn insights(&self) -> Option<TrendInsights> {
        let latest = self.latest()?;
        let overall = latest.overall();

        Some(TrendInsights {
            latest_period: latest.period(),
            status: BalanceStatus::from_share(overall),
            good_balance: is_good_balance(overall),
            most_imbalanced_category: most_imbalanced_category(latest).map(|(category, _)| category),
            latest_shift: self.latest_shift(),
            delta: self.trend_delta(),
        })
    }
}

impl From<Vec<BalanceSnapshot>> for HistoricalBalanceTracker {
    fn from(snapshots: Vec<BalanceSnapshot>) -> Self {
        let mut tracker = Self::new();
        for snapshot in snapshots {
            tracker.insert(snapshot);
        }
        tracker
    }
}

impl From<HistoricalBalanceTracker> for Vec<BalanceSnapshot> {
    fn from(tracker: HistoricalBalanceTracker) -> Self {
        tracker.snapshots
    }
}
