//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `household` - In-memory household store (all ports)
//! - `question_bank` - File-backed question bank (JSON, YAML)

pub mod household;
pub mod question_bank;

pub use household::InMemoryHouseholdStore;
pub use question_bank::{BankFormat, FileQuestionBank};
