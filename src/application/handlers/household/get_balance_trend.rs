//! GetBalanceTrendHandler - Query handler for a family's balance history.

use std::sync::Arc;

use tracing::debug;

use crate::domain::balance::BalanceSnapshot;
use crate::domain::foundation::{DomainError, FamilyId};
use crate::domain::history::{TrendDelta, TrendInsights};
use crate::ports::SnapshotRepository;

/// Query for a family's balance trend.
#[derive(Debug, Clone)]
pub struct GetBalanceTrendQuery {
    pub family_id: FamilyId,
}

/// Snapshots in period order with their summary.
#[derive(Debug, Clone)]
pub struct GetBalanceTrendResult {
    pub trend: Vec<BalanceSnapshot>,
    pub delta: TrendDelta,
    /// None until the first check-in is recorded.
    pub insights: Option<TrendInsights>,
}

/// Handler for reading balance trends.
pub struct GetBalanceTrendHandler {
    snapshots: Arc<dyn SnapshotRepository>,
}

impl GetBalanceTrendHandler {
    pub fn new(snapshots: Arc<dyn SnapshotRepository>) -> Self {
        Self { snapshots }
    }

    pub async fn handle(
        &self,
        query: GetBalanceTrendQuery,
    ) -> Result<GetBalanceTrendResult, DomainError> {
        let tracker = self.snapshots.load_tracker(query.family_id).await?;
        debug!(family_id = %query.family_id, snapshots = tracker.len(), "Loaded balance trend");

        Ok(GetBalanceTrendResult {
            trend: tracker.trend().to_vec(),
            delta: tracker.trend_delta(),
            insights: tracker.insights(),
        })
    }
}
