//! CompleteAssessmentHandler - Command handler for finalizing an assessment.
//!
//! Validates the responses against the catalog, persists the completion,
//! and returns the computed results.

use std::sync::Arc;

use tracing::{error, info};

use crate::application::handlers::{load_catalog, read_failure};
use crate::domain::analysis::Results;
use crate::domain::assessment::{Assessment, AssessmentError, AssessmentPatch, ResponseSet};
use crate::domain::foundation::{AssessmentId, Timestamp};
use crate::ports::{AssessmentRepository, QuestionReader};

/// Command to complete an assessment.
#[derive(Debug, Clone)]
pub struct CompleteAssessmentCommand {
    pub assessment_id: AssessmentId,
    pub responses: ResponseSet,
    pub completed_at: Timestamp,
}

/// Result of successful completion.
#[derive(Debug, Clone)]
pub struct CompleteAssessmentResult {
    pub assessment: Assessment,
    pub results: Results,
}

/// Handler for completing assessments.
pub struct CompleteAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
    questions: Arc<dyn QuestionReader>,
}

impl CompleteAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>, questions: Arc<dyn QuestionReader>) -> Self {
        Self {
            repository,
            questions,
        }
    }

    pub async fn handle(&self, cmd: CompleteAssessmentCommand) -> Result<CompleteAssessmentResult, AssessmentError> {
        let catalog = load_catalog(self.questions.as_ref()).await?;

        // 1. Validate the completion against the stored aggregate
        let mut assessment = self
            .repository
            .find_by_id(cmd.assessment_id)
            .await
            .map_err(read_failure)?
            .ok_or(AssessmentError::NotFound(cmd.assessment_id))?;
        assessment.complete(cmd.responses.clone(), &catalog, cmd.completed_at)?;

        // 2. Persist
        let stored = self
            .repository
            .update(
                cmd.assessment_id,
                AssessmentPatch::completion(cmd.responses, cmd.completed_at),
            )
            .await
            .map_err(|e| {
                error!(assessment_id = %cmd.assessment_id, error = %e, "failed to save completed assessment");
                AssessmentError::persist_failed(e.to_string())
            })?;

        // 3. Derive results
        let results = Results::for_assessment(&stored, &catalog);
        info!(
            assessment_id = %stored.id(),
            percentage = %results.overall_percentage,
            tier = %results.performance_tier,
            "assessment completed"
        );

        Ok(CompleteAssessmentResult {
            assessment: stored,
            results,
        })
    }
}
