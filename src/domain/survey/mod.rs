//! Survey module - questions, family priorities and collected answers.
//!
//! These are the read-only inputs of the scoring engine. Questions and
//! priorities are loaded once per session; responses accumulate outside
//! the domain and arrive here as a completed or partial map.

mod attributes;
mod priorities;
mod question;
mod responses;

pub use attributes::{
    BaseWeight, ChildDevelopment, EmotionalLabor, Frequency, Invisibility, ResearchImpact,
};
pub use priorities::{FamilyPriorities, PriorityRank};
pub use question::Question;
pub use responses::ResponseMap;
