//! StartAssessmentHandler - Command handler for beginning a questionnaire run.

use std::sync::Arc;

use tracing::{error, info};

use crate::application::handlers::load_catalog;
use crate::application::AssessmentSession;
use crate::domain::assessment::{AssessmentError, NewAssessment};
use crate::domain::foundation::Timestamp;
use crate::ports::{AssessmentRepository, QuestionReader};

/// Command to start a new assessment.
#[derive(Debug, Clone, Default)]
pub struct StartAssessmentCommand {
    /// Defaults to now.
    pub started_at: Option<Timestamp>,
}

/// Result of successful start.
#[derive(Debug, Clone)]
pub struct StartAssessmentResult {
    pub session: AssessmentSession,
}

/// Handler for starting assessments.
pub struct StartAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
    questions: Arc<dyn QuestionReader>,
}

impl StartAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>, questions: Arc<dyn QuestionReader>) -> Self {
        Self {
            repository,
            questions,
        }
    }

    pub async fn handle(&self, cmd: StartAssessmentCommand) -> Result<StartAssessmentResult, AssessmentError> {
        // 1. Catalog first: nothing is persisted if there is nothing to ask
        let catalog = load_catalog(self.questions.as_ref()).await?;

        // 2. Persist the in-progress assessment
        let started_at = cmd.started_at.unwrap_or_else(Timestamp::now);
        let assessment = self
            .repository
            .create(NewAssessment::start(started_at))
            .await
            .map_err(|e| {
                error!(error = %e, "failed to create assessment");
                AssessmentError::persist_failed(e.to_string())
            })?;

        info!(
            assessment_id = %assessment.id(),
            questions = catalog.len(),
            "assessment started"
        );

        Ok(StartAssessmentResult {
            session: AssessmentSession::new(&assessment, catalog),
        })
    }
}
