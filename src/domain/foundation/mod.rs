//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the household balance domain.

mod assignee;
mod category;
mod errors;
mod ids;
mod percentage;
mod period;
mod timestamp;

pub use assignee::Assignee;
pub use category::Category;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{FamilyId, QuestionId};
pub use percentage::Percentage;
pub use period::Period;
pub use timestamp::Timestamp;
