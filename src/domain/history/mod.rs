//! History module - balance snapshots over time and what they show.

mod insights;
mod tracker;

pub use insights::{
    is_good_balance, most_imbalanced_category, BalanceShift, BalanceStatus, ShiftDirection,
    TrendDelta, TrendInsights, GOOD_BALANCE_THRESHOLD, SEVERE_IMBALANCE_THRESHOLD,
};
pub use tracker::HistoricalBalanceTracker;
