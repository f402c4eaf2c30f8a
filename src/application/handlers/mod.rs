//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;
pub mod dashboard;

#[cfg(test)]
pub(crate) mod test_support;

use tracing::warn;

use crate::domain::assessment::AssessmentError;
use crate::domain::catalog::QuestionCatalog;
use crate::ports::{QuestionReader, StoreError};

pub use assessment::{
    CompleteAssessmentCommand, CompleteAssessmentHandler, CompleteAssessmentResult,
    GetResultsHandler, GetResultsQuery, ResultsOutcome, StartAssessmentCommand,
    StartAssessmentHandler, StartAssessmentResult,
};
pub use dashboard::{GetDashboardSummaryHandler, GetDashboardSummaryQuery};

/// Loads a non-empty catalog.
///
/// # Errors
///
/// - `CatalogUnavailable` if the reader fails
/// - `EmptyCatalog` if it returns no questions
pub(crate) async fn load_catalog(questions: &dyn QuestionReader) -> Result<QuestionCatalog, AssessmentError> {
    let catalog = questions.load_catalog().await.map_err(|e| {
        warn!(error = %e, "failed to load question catalog");
        AssessmentError::catalog_unavailable(e.to_string())
    })?;
    if catalog.is_empty() {
        warn!("question catalog is empty");
        return Err(AssessmentError::EmptyCatalog);
    }
    Ok(catalog)
}

/// Maps a failed store read.
pub(crate) fn read_failure(err: StoreError) -> AssessmentError {
    warn!(error = %err, "assessment store read failed");
    AssessmentError::infrastructure(err.to_string())
}
