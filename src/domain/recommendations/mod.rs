//! Recommendations module - follow-up tasks that would even out the load.

mod recommender;

pub use recommender::{TaskRecommendation, TaskRecommender};
