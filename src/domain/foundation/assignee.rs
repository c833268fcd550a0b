//! Assignee - which of the two tracked parties handles a task.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two tracked parties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Assignee {
    #[serde(alias = "a", alias = "Mama")]
    A,
    #[serde(alias = "b", alias = "Papa")]
    B,
}

impl Assignee {
    /// Returns the other party.
    pub fn other(&self) -> Assignee {
        match self {
            Assignee::A => Assignee::B,
            Assignee::B => Assignee::A,
        }
    }
}

impl fmt::Display for Assignee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Assignee::A => write!(f, "A"),
            Assignee::B => write!(f, "B"),
        }
    }
}
