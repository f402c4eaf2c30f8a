//! Assessment-specific error types.

use thiserror::Error;

use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode, QuestionId, ValidationError};

/// Local, recoverable failures of the navigation state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("The question catalog is empty")]
    EmptyCatalog,

    #[error("Question {question_id} must be answered before moving on")]
    AnswerRequired { question_id: QuestionId },

    #[error(transparent)]
    InvalidValue(#[from] ValidationError),
}

/// Errors surfaced to callers of the assessment workflow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssessmentError {
    /// The catalog could not be loaded; retryable.
    #[error("Failed to load questions: {0}")]
    CatalogUnavailable(String),

    /// The catalog loaded but holds no questions.
    #[error("No questions are available")]
    EmptyCatalog,

    #[error("Assessment not found: {0}")]
    NotFound(AssessmentId),

    #[error(transparent)]
    Navigation(#[from] NavigationError),

    #[error("Please answer all questions before submitting ({answered} of {total} answered)")]
    Incomplete { answered: usize, total: usize },

    #[error("Assessment has already been completed")]
    AlreadyCompleted,

    /// The store rejected a create/update; collected responses are kept.
    #[error("Failed to save assessment: {0}")]
    PersistFailed(String),

    #[error("Error: {0}")]
    Infrastructure(String),
}

impl AssessmentError {
    pub fn catalog_unavailable(message: impl Into<String>) -> Self {
        AssessmentError::CatalogUnavailable(message.into())
    }

    pub fn persist_failed(message: impl Into<String>) -> Self {
        AssessmentError::PersistFailed(message.into())
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        AssessmentError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::CatalogUnavailable(_) => ErrorCode::CatalogUnavailable,
            AssessmentError::EmptyCatalog => ErrorCode::EmptyCatalog,
            AssessmentError::NotFound(_) => ErrorCode::AssessmentNotFound,
            AssessmentError::Navigation(NavigationError::EmptyCatalog) => ErrorCode::EmptyCatalog,
            AssessmentError::Navigation(NavigationError::AnswerRequired { .. }) => {
                ErrorCode::AnswerRequired
            }
            AssessmentError::Navigation(NavigationError::InvalidValue(_)) => ErrorCode::OutOfRange,
            AssessmentError::Incomplete { .. } => ErrorCode::IncompleteAssessment,
            AssessmentError::AlreadyCompleted => ErrorCode::AssessmentCompleted,
            AssessmentError::PersistFailed(_) => ErrorCode::PersistFailed,
            AssessmentError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }

    /// Returns true if the caller may retry the same operation.
    pub fn is_retryable(&self) -> bool {
        self.code().is_retryable()
    }
}

impl From<DomainError> for AssessmentError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::AssessmentCompleted | ErrorCode::InvalidStateTransition => {
                AssessmentError::AlreadyCompleted
            }
            ErrorCode::EmptyCatalog => AssessmentError::EmptyCatalog,
            ErrorCode::IncompleteAssessment => {
                let count = |key: &str| {
                    err.details
                        .get(key)
                        .and_then(|v| v.parse().ok())
                        .unwrap_or_default()
                };
                AssessmentError::Incomplete {
                    answered: count("answered"),
                    total: count("total"),
                }
            }
            ErrorCode::CatalogUnavailable => AssessmentError::CatalogUnavailable(err.message),
            ErrorCode::PersistFailed => AssessmentError::PersistFailed(err.message),
            _ => AssessmentError::Infrastructure(err.to_string()),
        }
    }
}
