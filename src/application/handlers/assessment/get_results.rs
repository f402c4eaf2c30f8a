//! GetResultsHandler - Query handler for an assessment's results.
//!
//! Results are recomputed from the stored assessment and the current
//! catalog on every call.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::application::handlers::{load_catalog, read_failure};
use crate::domain::analysis::Results;
use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::AssessmentId;
use crate::ports::{AssessmentRepository, QuestionReader};

/// Query for one assessment's results.
#[derive(Debug, Clone)]
pub struct GetResultsQuery {
    pub assessment_id: AssessmentId,
}

/// Outcome of a results query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsOutcome {
    Ready(Box<Results>),
    /// No assessment with this id; the caller should start a new one.
    NoData { assessment_id: AssessmentId },
}

impl ResultsOutcome {
    pub fn results(&self) -> Option<&Results> {
        match self {
            ResultsOutcome::Ready(results) => Some(results.as_ref()),
            ResultsOutcome::NoData { .. } => None,
        }
    }
}

/// Handler for results queries.
pub struct GetResultsHandler {
    repository: Arc<dyn AssessmentRepository>,
    questions: Arc<dyn QuestionReader>,
}

impl GetResultsHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>, questions: Arc<dyn QuestionReader>) -> Self {
        Self {
            repository,
            questions,
        }
    }

    pub async fn handle(&self, query: GetResultsQuery) -> Result<ResultsOutcome, AssessmentError> {
        let Some(assessment) = self
            .repository
            .find_by_id(query.assessment_id)
            .await
            .map_err(read_failure)?
        else {
            debug!(assessment_id = %query.assessment_id, "no assessment for results");
            return Ok(ResultsOutcome::NoData {
                assessment_id: query.assessment_id,
            });
        };

        let catalog = load_catalog(self.questions.as_ref()).await?;
        let results = Results::for_assessment(&assessment, &catalog);
        if let Some(inconsistency) = &results.inconsistency {
            warn!(
                assessment_id = %query.assessment_id,
                ?inconsistency,
                "results computed from responses that do not match the catalog"
            );
        }

        Ok(ResultsOutcome::Ready(Box::new(results)))
    }
}
