//! ResponseStore port - Answers per family and period.

use async_trait::async_trait;

use super::StoreError;
use crate::domain::foundation::{FamilyId, Period};
use crate::domain::survey::ResponseMap;

/// Per-period answer storage.
///
/// Merging concurrent submissions into one map is the store's job;
/// last write wins per question id.
#[async_trait]
pub trait ResponseStore: Send + Sync {
    /// Answers recorded for `period`. An unrecorded period is an empty map.
    async fn get_responses(
        &self,
        family_id: FamilyId,
        period: Period,
    ) -> Result<ResponseMap, StoreError>;

    /// Merges `responses` into the answers already stored for `period`.
    async fn save_responses(
        &self,
        family_id: FamilyId,
        period: Period,
        responses: &ResponseMap,
    ) -> Result<(), StoreError>;
}
