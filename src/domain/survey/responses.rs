//! ResponseMap - who handles each answered question.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::{Assignee, QuestionId};

/// Answers for one period, keyed by question id.
///
/// Unanswered questions are simply absent. Iteration is ordered by id, so
/// sums over the map accumulate in the same order every time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseMap(BTreeMap<QuestionId, Assignee>);

impl ResponseMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer, replacing any earlier one for the same question.
    pub fn insert(&mut self, question_id: QuestionId, assignee: Assignee) -> Option<Assignee> {
        self.0.insert(question_id, assignee)
    }

    /// Builder-style `insert`.
    pub fn with(mut self, question_id: QuestionId, assignee: Assignee) -> Self {
        self.insert(question_id, assignee);
        self
    }

    pub fn get(&self, question_id: &QuestionId) -> Option<Assignee> {
        self.0.get(question_id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates answers in question-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, Assignee)> {
        self.0.iter().map(|(id, assignee)| (id, *assignee))
    }

    /// Applies `other` on top of `self`; later answers win per question id.
    pub fn merge(mut self, other: &ResponseMap) -> Self {
        for (id, assignee) in other.iter() {
            self.0.insert(id.clone(), assignee);
        }
        self
    }
}

impl FromIterator<(QuestionId, Assignee)> for ResponseMap {
    fn from_iter<I: IntoIterator<Item = (QuestionId, Assignee)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
