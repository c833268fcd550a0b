//! Errors shared by the persistence ports.

use crate::domain::foundation::{DomainError, ErrorCode, FamilyId};

/// Errors that can occur while reading or writing household data.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Family not found: {0}")]
    FamilyNotFound(FamilyId),

    #[error("Question bank unavailable: {0}")]
    QuestionBankUnavailable(String),

    #[error("Malformed document: {0}")]
    Malformed(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        let code = match &err {
            StoreError::FamilyNotFound(_) => ErrorCode::FamilyNotFound,
            StoreError::QuestionBankUnavailable(_) | StoreError::Malformed(_) => {
                ErrorCode::QuestionBankUnavailable
            }
            StoreError::Storage(_) => ErrorCode::StorageError,
        };
        let domain_error = DomainError::new(code, err.to_string());
        match err {
            StoreError::FamilyNotFound(family_id) => {
                domain_error.with_detail("family_id", family_id.to_string())
            }
            _ => domain_error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let family_id = FamilyId::new();
        let msg = format!("{}", StoreError::FamilyNotFound(family_id));
        assert!(msg.contains("Family not found"));
        assert!(msg.contains(&family_id.to_string()));
    }

    #[test]
    fn test_family_not_found_maps_to_domain_code() {
        let family_id = FamilyId::new();
        let err: DomainError = StoreError::FamilyNotFound(family_id).into();
        assert_eq!(err.code, ErrorCode::FamilyNotFound);
        assert_eq!(err.details.get("family_id"), Some(&family_id.to_string()));
    }

    #[test]
    fn test_malformed_bank_maps_to_unavailable() {
        let err: DomainError = StoreError::Malformed("bad yaml".to_string()).into();
        assert_eq!(err.code, ErrorCode::QuestionBankUnavailable);
    }
}
