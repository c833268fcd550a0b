//! Weighting module - the multi-factor task weight model.
//!
//! A question's weight starts from its base tier and is scaled by five
//! attribute multipliers and one family-priority multiplier. All tables
//! are fixed constants; missing attributes use a named default.

mod calculator;
mod multipliers;

pub use calculator::{WeightBreakdown, WeightCalculator};
pub use multipliers::{priority_multiplier, Multiplier};
