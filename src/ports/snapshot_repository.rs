//! SnapshotRepository port - Stored balance history per family.

use async_trait::async_trait;

use super::StoreError;
use crate::domain::foundation::FamilyId;
use crate::domain::history::HistoricalBalanceTracker;

/// Persistence for a family's snapshot history.
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Loads the tracker; a family without history gets an empty one.
    async fn load_tracker(&self, family_id: FamilyId) -> Result<HistoricalBalanceTracker, StoreError>;

    /// Replaces the stored tracker.
    async fn save_tracker(
        &self,
        family_id: FamilyId,
        tracker: &HistoricalBalanceTracker,
    ) -> Result<(), StoreError>;
}
