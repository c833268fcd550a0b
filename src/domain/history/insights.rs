//! Trend insights derived from balance snapshots.

use serde::{Deserialize, Serialize};

use crate::domain::balance::{BalanceSnapshot, CategoryBalance, PartyShare};
use crate::domain::foundation::{Category, Period};

/// Distance from 50% below which a split counts as good balance.
pub const GOOD_BALANCE_THRESHOLD: f64 = 10.0;

/// Distance from 50% at or above which a split is severely imbalanced.
pub const SEVERE_IMBALANCE_THRESHOLD: f64 = 25.0;

const SHIFT_EPSILON: f64 = 1e-9;

/// True when `|a − 50| < 10`.
pub fn is_good_balance(share: PartyShare) -> bool {
    share.a.distance_from_even() < GOOD_BALANCE_THRESHOLD
}

/// Classification of a split by its distance from 50/50.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStatus {
    /// Within 10 points of an even split
    Balanced,
    /// 10 to 25 points off
    ModeratelyImbalanced,
    /// 25 points or more off
    SeverelyImbalanced,
}

impl BalanceStatus {
    pub fn from_share(share: PartyShare) -> Self {
        let distance = share.a.distance_from_even();
        if distance < GOOD_BALANCE_THRESHOLD {
            Self::Balanced
        } else if distance < SEVERE_IMBALANCE_THRESHOLD {
            Self::ModeratelyImbalanced
        } else {
            Self::SeverelyImbalanced
        }
    }
}

impl std::fmt::Display for BalanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Balanced => write!(f, "Balanced"),
            Self::ModeratelyImbalanced => write!(f, "Moderately imbalanced"),
            Self::SeverelyImbalanced => write!(f, "Severely imbalanced"),
        }
    }
}

/// Category with the largest imbalance in `snapshot`.
///
/// Ties go to the earlier category in canonical order. Returns None when
/// every category is perfectly even.
pub fn most_imbalanced_category(snapshot: &BalanceSnapshot) -> Option<(Category, CategoryBalance)> {
    snapshot
        .categories()
        .filter(|(_, balance)| balance.imbalance.value() > 0.0)
        .fold(None, |best: Option<(Category, CategoryBalance)>, candidate| match best {
            Some(current) if current.1.imbalance.value() >= candidate.1.imbalance.value() => {
                Some(current)
            }
            _ => Some(candidate),
        })
}

/// Which way the overall split moved relative to an even split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftDirection {
    TowardBalance,
    AwayFromBalance,
    Unchanged,
}

/// Change in overall balance between two consecutive snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BalanceShift {
    pub from: Period,
    pub to: Period,
    /// Change in party A's share, in percentage points.
    pub delta_a: f64,
    pub direction: ShiftDirection,
}

impl BalanceShift {
    pub fn between(previous: &BalanceSnapshot, latest: &BalanceSnapshot) -> Self {
        let before = previous.overall().a.distance_from_even();
        let after = latest.overall().a.distance_from_even();
        let direction = if (after - before).abs() < SHIFT_EPSILON {
            ShiftDirection::Unchanged
        } else if after < before {
            ShiftDirection::TowardBalance
        } else {
            ShiftDirection::AwayFromBalance
        };

        Self {
            from: previous.period(),
            to: latest.period(),
            delta_a: latest.overall().a.value() - previous.overall().a.value(),
            direction,
        }
    }
}

/// Change in overall shares from the first to the last snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendDelta {
    pub delta_a: f64,
    pub delta_b: f64,
}

impl TrendDelta {
    pub fn between(first: &BalanceSnapshot, last: &BalanceSnapshot) -> Self {
        Self {
            delta_a: last.overall().a.value() - first.overall().a.value(),
            delta_b: last.overall().b.value() - first.overall().b.value(),
        }
    }
}

/// Everything a dashboard needs to summarize the trend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendInsights {
    pub latest_period: Period,
    pub status: BalanceStatus,
    pub good_balance: bool,
    pub most_imbalanced_category: Option<Category>,
    pub latest_shift: Option<BalanceShift>,
    pub delta: TrendDelta,
}
