//! Household command and query handlers.
//!
//! Handlers for recording check-ins and reading balance, samples and
//! recommendations.

// Command handlers
mod record_check_in;

// Query handlers
mod get_balance_trend;
mod recommend_tasks;
mod sample_check_in;

pub use get_balance_trend::{GetBalanceTrendHandler, GetBalanceTrendQuery, GetBalanceTrendResult};
pub use record_check_in::{RecordCheckInCommand, RecordCheckInHandler, RecordCheckInResult};
pub use recommend_tasks::{RecommendTasksHandler, RecommendTasksQuery, RecommendTasksResult};
pub use sample_check_in::{SampleCheckInHandler, SampleCheckInQuery, SampleCheckInResult};
