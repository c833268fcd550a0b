//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `QuestionBankProvider` - Read-only question bank
//! - `ResponseStore` - Per-period answers
//! - `PrioritiesProvider` - Family category priorities
//! - `SnapshotRepository` - Balance history persistence

mod priorities_provider;
mod question_bank;
mod response_store;
mod snapshot_repository;
mod store_error;

pub use priorities_provider::PrioritiesProvider;
pub use question_bank::QuestionBankProvider;
pub use response_store::ResponseStore;
pub use snapshot_repository::SnapshotRepository;
pub use store_error::StoreError;
