//! In-memory household store for development and testing.
//!
//! Implements every household port over `tokio` locks. Families must be
//! registered before their responses, priorities or history can be read.
//!
//! # Usage
//!
//! ```ignore
//! use household_balance::adapters::InMemoryHouseholdStore;
//!
//! let store = InMemoryHouseholdStore::with_questions(questions);
//! store.register_family(family_id, FamilyPriorities::neutral()).await;
//! ```

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::foundation::{FamilyId, Period};
use crate::domain::history::HistoricalBalanceTracker;
use crate::domain::survey::{FamilyPriorities, Question, ResponseMap};
use crate::ports::{
    PrioritiesProvider, QuestionBankProvider, ResponseStore, SnapshotRepository, StoreError,
};

/// Stored state for one family.
#[derive(Debug, Clone, Default)]
struct FamilyRecord {
    priorities: FamilyPriorities,
    responses: HashMap<Period, ResponseMap>,
    tracker: HistoricalBalanceTracker,
}

/// In-memory implementation of the household ports.
#[derive(Debug, Default)]
pub struct InMemoryHouseholdStore {
    questions: RwLock<Vec<Question>>,
    families: RwLock<HashMap<FamilyId, FamilyRecord>>,
}

impl InMemoryHouseholdStore {
    /// Creates an empty store with no questions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store serving `questions` as its bank.
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions: RwLock::new(questions),
            families: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a family, replacing its priorities if already known.
    pub async fn register_family(&self, family_id: FamilyId, priorities: FamilyPriorities) {
        let mut families = self.families.write().await;
        families.entry(family_id).or_default().priorities = priorities;
    }

    // === Test Helpers ===

    /// Number of registered families.
    pub async fn family_count(&self) -> usize {
        self.families.read().await.len()
    }
}

#[async_trait]
impl QuestionBankProvider for InMemoryHouseholdStore {
    async fn load_questions(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.questions.read().await.clone())
    }
}

#[async_trait]
impl ResponseStore for InMemoryHouseholdStore {
    async fn get_responses(
        &self,
        family_id: FamilyId,
        period: Period,
    ) -> Result<ResponseMap, StoreError> {
        let families = self.families.read().await;
        let record = families
            .get(&family_id)
            .ok_or(StoreError::FamilyNotFound(family_id))?;
        Ok(record.responses.get(&period).cloned().unwrap_or_default())
    }

    async fn save_responses(
        &self,
        family_id: FamilyId,
        period: Period,
        responses: &ResponseMap,
    ) -> Result<(), StoreError> {
        let mut families = self.families.write().await;
        let record = families
            .get_mut(&family_id)
            .ok_or(StoreError::FamilyNotFound(family_id))?;
        let merged = record
            .responses
            .remove(&period)
            .unwrap_or_default()
            .merge(responses);
        record.responses.insert(period, merged);
        Ok(())
    }
}

#[async_trait]
impl PrioritiesProvider for InMemoryHouseholdStore {
    async fn get_priorities(&self, family_id: FamilyId) -> Result<FamilyPriorities, StoreError> {
        self.families
            .read()
            .await
            .get(&family_id)
            .map(|record| record.priorities)
            .ok_or(StoreError::FamilyNotFound(family_id))
    }
}

#[async_trait]
impl SnapshotRepository for InMemoryHouseholdStore {
    async fn load_tracker(&self, family_id: FamilyId) -> Result<HistoricalBalanceTracker, StoreError> {
        self.families
            .read()
            .await
            .get(&family_id)
            .map(|record| record.tracker.clone())
            .ok_or(StoreError::FamilyNotFound(family_id))
    }

    async fn save_tracker(
        &self,
        family_id: FamilyId,
        tracker: &HistoricalBalanceTracker,
    ) -> Result<(), StoreError> {
        let mut families = self.families.write().await;
        let record = families
            .get_mut(&family_id)
            .ok_or(StoreError::FamilyNotFound(family_id))?;
        record.tracker = tracker.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{Assignee, Category, QuestionId};

    fn qid(id: &str) -> QuestionId {
        QuestionId::new(id).unwrap()
    }

    #[tokio::test]
    async fn unknown_family_is_not_found() {
        let store = InMemoryHouseholdStore::new();
        let family_id = FamilyId::new();

        assert!(matches!(
            store.get_priorities(family_id).await,
            Err(StoreError::FamilyNotFound(id)) if id == family_id
        ));
        assert!(store.get_responses(family_id, Period::Initial).await.is_err());
        assert!(store.load_tracker(family_id).await.is_err());
    }

    #[tokio::test]
    async fn unrecorded_period_is_empty() {
        let store = InMemoryHouseholdStore::new();
        let family_id = FamilyId::new();
        store.register_family(family_id, FamilyPriorities::neutral()).await;

        let responses = store.get_responses(family_id, Period::Week(2)).await.unwrap();
        assert!(responses.is_empty());
    }

    #[tokio::test]
    async fn save_responses_merges_last_write_wins() {
        let store = InMemoryHouseholdStore::new();
        let family_id = FamilyId::new();
        store.register_family(family_id, FamilyPriorities::neutral()).await;

        let first = ResponseMap::new().with(qid("q1"), Assignee::A).with(qid("q2"), Assignee::A);
        let second = ResponseMap::new().with(qid("q2"), Assignee::B);
        store.save_responses(family_id, Period::Week(1), &first).await.unwrap();
        store.save_responses(family_id, Period::Week(1), &second).await.unwrap();

        let stored = store.get_responses(family_id, Period::Week(1)).await.unwrap();
        assert_eq!(stored.get(&qid("q1")), Some(Assignee::A));
        assert_eq!(stored.get(&qid("q2")), Some(Assignee::B));
    }

    #[tokio::test]
    async fn register_family_updates_priorities() {
        let store = InMemoryHouseholdStore::new();
        let family_id = FamilyId::new();
        let priorities = FamilyPriorities::new(Some(Category::InvisibleHousehold), None, None);

        store.register_family(family_id, FamilyPriorities::neutral()).await;
        store.register_family(family_id, priorities).await;

        assert_eq!(store.get_priorities(family_id).await.unwrap(), priorities);
        assert_eq!(store.family_count().await, 1);
    }

    #[tokio::test]
    async fn tracker_round_trips() {
        let store = InMemoryHouseholdStore::new();
        let family_id = FamilyId::new();
        store.register_family(family_id, FamilyPriorities::neutral()).await;

        let tracker = HistoricalBalanceTracker::new().record_snapshot(
            Period::Initial,
            &[],
            &ResponseMap::new(),
            &FamilyPriorities::neutral(),
        );
        store.save_tracker(family_id, &tracker).await.unwrap();

        assert_eq!(store.load_tracker(family_id).await.unwrap(), tracker);
    }
}
