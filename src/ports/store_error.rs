use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode};

/// Errors that can occur in assessment and catalog storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Assessment not found: {0}")]
    NotFound(AssessmentId),

    /// The store refused a write that would violate an aggregate rule.
    #[error("Update rejected: {0}")]
    Rejected(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to serialize: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(String),

    /// Stored catalog data failed validation.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),
}

impl StoreError {
    pub fn code(&self) -> ErrorCode {
        match self {
            StoreError::NotFound(_) => ErrorCode::AssessmentNotFound,
            StoreError::Rejected(_) => ErrorCode::AssessmentCompleted,
            StoreError::InvalidCatalog(_) => ErrorCode::ValidationFailed,
            StoreError::Unavailable(_) | StoreError::Serialization(_) | StoreError::Io(_) => {
                ErrorCode::StorageError
            }
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Unavailable(_) | StoreError::Io(_))
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for StoreError {
    fn from(err: serde_yaml::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}
