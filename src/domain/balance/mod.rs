//! Balance module - weighted balance between the two parties.
//!
//! `BalanceAggregator` is the only place balance percentages are computed.
//! Presentation code that needs placeholder numbers must produce them itself.

mod aggregator;
mod shares;
mod snapshot;

pub use aggregator::{BalanceAggregator, BalanceResult};
pub use shares::{CategoryBalance, PartyShare};
pub use snapshot::BalanceSnapshot;
