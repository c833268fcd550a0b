//! Household Balance - weighted household-responsibility scoring.
//!
//! Scores how household and parenting work is split between two partners,
//! weighting each task by frequency, visibility, emotional load and the
//! family's own priorities. Also samples recurring check-ins and tracks how
//! the balance moves over time.
//!
//! # Architecture
//!
//! - `domain` - Pure scoring, sampling and history logic
//! - `ports` - Async interfaces for question banks and household storage
//! - `adapters` - In-memory and file-backed port implementations
//! - `application` - Command and query handlers
//! - `config` - Environment-driven configuration

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
