//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod household;

pub use household::{
    GetBalanceTrendHandler, GetBalanceTrendQuery, GetBalanceTrendResult, RecommendTasksHandler,
    RecommendTasksQuery, RecommendTasksResult, RecordCheckInCommand, RecordCheckInHandler,
    RecordCheckInResult, SampleCheckInHandler, SampleCheckInQuery, SampleCheckInResult,
};
