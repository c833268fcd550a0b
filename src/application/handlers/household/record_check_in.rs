//! RecordCheckInHandler - Command handler for recording a period's answers.
//!
//! Saves the submitted answers, aggregates everything stored for the period
//! and appends the resulting snapshot to the family's history.

use std::sync::Arc;

use tracing::info;

use crate::domain::balance::BalanceSnapshot;
use crate::domain::foundation::{DomainError, ErrorCode, FamilyId, Period, Timestamp};
use crate::domain::history::TrendInsights;
use crate::domain::survey::ResponseMap;
use crate::ports::{PrioritiesProvider, QuestionBankProvider, ResponseStore, SnapshotRepository};

/// Command to record a check-in.
#[derive(Debug, Clone)]
pub struct RecordCheckInCommand {
    pub family_id: FamilyId,
    pub period: Period,
    /// Newly submitted answers, merged over anything already stored.
    pub responses: ResponseMap,
}

/// Result of a recorded check-in.
#[derive(Debug, Clone)]
pub struct RecordCheckInResult {
    pub snapshot: BalanceSnapshot,
    /// Insights over the updated history.
    pub insights: Option<TrendInsights>,
    pub recorded_at: Timestamp,
}

/// Handler for recording check-ins.
pub struct RecordCheckInHandler {
    question_bank: Arc<dyn QuestionBankProvider>,
    response_store: Arc<dyn ResponseStore>,
    priorities: Arc<dyn PrioritiesProvider>,
    snapshots: Arc<dyn SnapshotRepository>,
}

impl RecordCheckInHandler {
    pub fn new(
        question_bank: Arc<dyn QuestionBankProvider>,
        response_store: Arc<dyn ResponseStore>,
        priorities: Arc<dyn PrioritiesProvider>,
        snapshots: Arc<dyn SnapshotRepository>,
    ) -> Self {
        Self {
            question_bank,
            response_store,
            priorities,
            snapshots,
        }
    }

    pub async fn handle(
        &self,
        cmd: RecordCheckInCommand,
    ) -> Result<RecordCheckInResult, DomainError> {
        // 1. Persist the new answers
        if !cmd.responses.is_empty() {
            self.response_store
                .save_responses(cmd.family_id, cmd.period, &cmd.responses)
                .await?;
        }

        // 2. Load everything the aggregation needs
        let questions = self.question_bank.load_questions().await?;
        let responses = self
            .response_store
            .get_responses(cmd.family_id, cmd.period)
            .await?;
        let priorities = self.priorities.get_priorities(cmd.family_id).await?;
        let tracker = self.snapshots.load_tracker(cmd.family_id).await?;

        // 3. Record and persist the snapshot
        let tracker = tracker.record_snapshot(cmd.period, &questions, &responses, &priorities);
        self.snapshots.save_tracker(cmd.family_id, &tracker).await?;

        let snapshot = tracker
            .get(cmd.period)
            .cloned()
            .ok_or_else(|| {
                DomainError::new(ErrorCode::InternalError, "Recorded snapshot missing from history")
            })?;

        info!(
            family_id = %cmd.family_id,
            period = %cmd.period,
            answered = responses.len(),
            overall_a = snapshot.overall().a.value(),
            "Recorded check-in"
        );

        Ok(RecordCheckInResult {
            snapshot,
            insights: tracker.insights(),
            recorded_at: Timestamp::now(),
        })
    }
}
