//! Question bank adapters.

mod file_bank;

pub use file_bank::{BankFormat, FileQuestionBank};
