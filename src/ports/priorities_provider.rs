//! PrioritiesProvider port - Family category priorities.

use async_trait::async_trait;

use super::StoreError;
use crate::domain::foundation::FamilyId;
use crate::domain::survey::FamilyPriorities;

/// Read access to a family's category priorities.
#[async_trait]
pub trait PrioritiesProvider: Send + Sync {
    /// The family's priorities; neutral when none were set.
    async fn get_priorities(&self, family_id: FamilyId) -> Result<FamilyPriorities, StoreError>;
}
