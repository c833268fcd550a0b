//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, enums, errors)
//! - `survey` - Questions, weight attributes, family priorities, responses
//! - `weighting` - Multi-factor task weight model
//! - `balance` - Weighted balance aggregation and snapshots
//! - `sampling` - Reproducible question sampling for weekly check-ins
//! - `history` - Snapshot series and trend insights
//! - `recommendations` - Rebalancing task suggestions
//!
//! Everything here is pure and synchronous: inputs in, new values out.

pub mod balance;
pub mod foundation;
pub mod history;
pub mod recommendations;
pub mod sampling;
pub mod survey;
pub mod weighting;
