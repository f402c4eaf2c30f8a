//! AssessmentSession - the single active questionnaire run.
//!
//! Owns the navigator and its responses exclusively. Submission works on a
//! copy of the responses, so a failed save leaves everything collected so
//! far in place for a retry.

use tracing::{debug, info};

use super::handlers::{CompleteAssessmentCommand, CompleteAssessmentHandler, CompleteAssessmentResult};
use crate::domain::assessment::{
    Assessment, AssessmentError, NavigationProgress, Navigator, ResponseSet,
};
use crate::domain::catalog::{Question, QuestionCatalog};
use crate::domain::foundation::{AssessmentId, Timestamp};

#[derive(Debug, Clone)]
pub struct AssessmentSession {
    assessment_id: AssessmentId,
    name: String,
    started_at: Timestamp,
    catalog: QuestionCatalog,
    navigator: Navigator,
    submitted: bool,
}

impl AssessmentSession {
    /// Opens a session over a stored in-progress assessment.
    ///
    /// Any responses already on the assessment are resumed.
    pub fn new(assessment: &Assessment, catalog: QuestionCatalog) -> Self {
        let navigator = Navigator::with_responses(&catalog, assessment.responses().clone());
        Self {
            assessment_id: assessment.id(),
            name: assessment.name().to_string(),
            started_at: *assessment.started_at(),
            catalog,
            navigator,
            submitted: assessment.is_completed(),
        }
    }

    pub fn assessment_id(&self) -> AssessmentId {
        self.assessment_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn responses(&self) -> &ResponseSet {
        self.navigator.responses()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn current_question(&self) -> Result<&Question, AssessmentError> {
        Ok(self.navigator.current_question()?)
    }

    pub fn progress(&self) -> NavigationProgress {
        self.navigator.progress()
    }

    pub fn can_submit(&self) -> bool {
        !self.submitted && self.navigator.can_submit()
    }

    pub fn submit_answer(&mut self, value: i32) -> Result<(), AssessmentError> {
        self.ensure_open()?;
        self.navigator.submit_answer(value)?;
        Ok(())
    }

    pub fn advance(&mut self) -> Result<bool, AssessmentError> {
        Ok(self.navigator.advance()?)
    }

    pub fn retreat(&mut self) -> bool {
        self.navigator.retreat()
    }

    /// Builds the completion command from a copy of the collected responses.
    ///
    /// # Errors
    ///
    /// - `AlreadyCompleted` if this session was already submitted
    /// - `Incomplete` if any question is unanswered
    pub fn submission(&self, completed_at: Timestamp) -> Result<CompleteAssessmentCommand, AssessmentError> {
        self.ensure_open()?;
        if !self.navigator.can_submit() {
            return Err(AssessmentError::Incomplete {
                answered: self.navigator.answered_count(),
                total: self.navigator.total_questions(),
            });
        }
        Ok(CompleteAssessmentCommand {
            assessment_id: self.assessment_id,
            responses: self.navigator.responses().clone(),
            completed_at,
        })
    }

    /// Submits through `handler`. On failure the session is unchanged and
    /// may be submitted again.
    pub async fn submit(
        &mut self,
        handler: &CompleteAssessmentHandler,
    ) -> Result<CompleteAssessmentResult, AssessmentError> {
        let command = self.submission(Timestamp::now())?;
        let result = handler.handle(command).await;
        match &result {
            Ok(_) => {
                self.submitted = true;
                info!(assessment_id = %self.assessment_id, "assessment submitted");
            }
            Err(err) => {
                debug!(
                    assessment_id = %self.assessment_id,
                    retained = self.navigator.answered_count(),
                    error = %err,
                    "submission failed; responses retained"
                );
            }
        }
        result
    }

    fn ensure_open(&self) -> Result<(), AssessmentError> {
        if self.submitted {
            Err(AssessmentError::AlreadyCompleted)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{NavigationError, NewAssessment};
    use crate::domain::catalog::Category;
    use crate::domain::foundation::QuestionId;

    fn catalog() -> QuestionCatalog {
        QuestionCatalog::new(vec![
            Question::new(QuestionId::new(1), Category::ProcessEfficiency, "A", 1).unwrap(),
            Question::new(QuestionId::new(2), Category::TechnologySystems, "B", 2).unwrap(),
        ])
        .unwrap()
    }

    fn session() -> AssessmentSession {
        let assessment = Assessment::from_new(
            AssessmentId::new(1),
            NewAssessment::start(Timestamp::from_unix_secs(1_700_000_000)),
        );
        AssessmentSession::new(&assessment, catalog())
    }

    #[test]
    fn submission_requires_every_answer() {
        let mut session = session();
        session.submit_answer(4).unwrap();
        let err = session.submission(Timestamp::now()).unwrap_err();
        assert_eq!(err, AssessmentError::Incomplete { answered: 1, total: 2 });
    }

    #[test]
    fn submission_copies_responses() {
        let mut session = session();
        session.submit_answer(4).unwrap();
        session.advance().unwrap();
        session.submit_answer(2).unwrap();

        let command = session.submission(Timestamp::now()).unwrap();
        assert_eq!(command.assessment_id, AssessmentId::new(1));
        assert_eq!(command.responses.total(), 6);
        assert_eq!(session.responses().len(), 2);
    }

    #[test]
    fn advance_errors_surface_as_navigation_errors() {
        let mut session = session();
        assert_eq!(
            session.advance(),
            Err(AssessmentError::Navigation(NavigationError::AnswerRequired {
                question_id: QuestionId::new(1)
            }))
        );
    }
}
