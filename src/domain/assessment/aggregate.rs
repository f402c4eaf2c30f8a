//! Assessment aggregate - one run of the questionnaire.
//!
//! # Invariants
//!
//! - At most one response per question
//! - A completed assessment answers every catalog question exactly once
//! - Completion happens once; completed assessments are immutable

use serde::{Deserialize, Serialize};

use super::ResponseSet;
use crate::domain::catalog::QuestionCatalog;
use crate::domain::foundation::{
    AssessmentId, AssessmentStatus, DomainError, ErrorCode, StateMachine, Timestamp,
};

/// An assessment that has not been persisted yet (no id assigned).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAssessment {
    pub name: String,
    pub started_at: Timestamp,
    pub completed_at: Option<Timestamp>,
    pub responses: ResponseSet,
    pub status: AssessmentStatus,
}

impl NewAssessment {
    /// Starts a fresh in-progress assessment.
    pub fn start(started_at: Timestamp) -> Self {
        Self {
            name: format!("Assessment {}", started_at.date().format("%Y-%m-%d")),
            started_at,
            completed_at: None,
            responses: ResponseSet::new(),
            status: AssessmentStatus::InProgress,
        }
    }
}

/// Partial update applied by `AssessmentRepository::update`.
///
/// `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentPatch {
    pub name: Option<String>,
    pub responses: Option<ResponseSet>,
    pub status: Option<AssessmentStatus>,
    pub completed_at: Option<Timestamp>,
}

impl AssessmentPatch {
    /// Patch that finalizes an assessment.
    pub fn completion(responses: ResponseSet, completed_at: Timestamp) -> Self {
        Self {
            name: None,
            responses: Some(responses),
            status: Some(AssessmentStatus::Completed),
            completed_at: Some(completed_at),
        }
    }
}

/// A persisted assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assessment {
    id: AssessmentId,
    name: String,
    started_at: Timestamp,
    completed_at: Option<Timestamp>,
    responses: ResponseSet,
    status: AssessmentStatus,
}

impl Assessment {
    /// Materializes a new assessment under the id the store assigned.
    pub fn from_new(id: AssessmentId, new: NewAssessment) -> Self {
        Self {
            id,
            name: new.name,
            started_at: new.started_at,
            completed_at: new.completed_at,
            responses: new.responses,
            status: new.status,
        }
    }

    /// Reconstitute an assessment from persistence (no validation).
    pub fn reconstitute(
        id: AssessmentId,
        name: String,
        started_at: Timestamp,
        completed_at: Option<Timestamp>,
        responses: ResponseSet,
        status: AssessmentStatus,
    ) -> Self {
        Self {
            id,
            name,
            started_at,
            completed_at,
            responses,
            status,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> AssessmentId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    pub fn completed_at(&self) -> Option<&Timestamp> {
        self.completed_at.as_ref()
    }

    pub fn responses(&self) -> &ResponseSet {
        &self.responses
    }

    pub fn status(&self) -> AssessmentStatus {
        self.status
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Finalizes the assessment with a full response set.
    ///
    /// # Errors
    ///
    /// - `AssessmentCompleted` if already finalized
    /// - `IncompleteAssessment` if the responses do not cover the catalog exactly
    pub fn complete(
        &mut self,
        responses: ResponseSet,
        catalog: &QuestionCatalog,
        completed_at: Timestamp,
    ) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        Self::validate_complete(&responses, catalog)?;

        self.status = self
            .status
            .transition_to(AssessmentStatus::Completed)
            .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;
        self.responses = responses;
        self.completed_at = Some(completed_at);
        Ok(())
    }

    /// Applies a store-level partial update.
    ///
    /// # Errors
    ///
    /// - `AssessmentCompleted` if the assessment is finalized
    /// - `InvalidStateTransition` for an illegal status change
    pub fn apply(&mut self, patch: AssessmentPatch) -> Result<(), DomainError> {
        self.ensure_mutable()?;

        if let Some(status) = patch.status {
            if status != self.status {
                self.status = self
                    .status
                    .transition_to(status)
                    .map_err(|e| DomainError::new(ErrorCode::InvalidStateTransition, e.to_string()))?;
            }
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(responses) = patch.responses {
            self.responses = responses;
        }
        if patch.completed_at.is_some() {
            self.completed_at = patch.completed_at;
        }
        if self.status.is_completed() && self.completed_at.is_none() {
            self.completed_at = Some(Timestamp::now());
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Private helpers
    // ─────────────────────────────────────────────────────────────────────────

    fn ensure_mutable(&self) -> Result<(), DomainError> {
        if self.status.is_mutable() {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::AssessmentCompleted,
                "Cannot modify a completed assessment",
            ))
        }
    }

    fn validate_complete(responses: &ResponseSet, catalog: &QuestionCatalog) -> Result<(), DomainError> {
        if catalog.is_empty() {
            return Err(DomainError::new(ErrorCode::EmptyCatalog, "The question catalog is empty"));
        }
        if let Some(stray) = responses.iter().find(|r| !catalog.contains(r.question_id)) {
            return Err(DomainError::new(
                ErrorCode::QuestionNotFound,
                format!("Response for unknown question {}", stray.question_id),
            ));
        }
        if responses.len() != catalog.len() {
            return Err(DomainError::new(
                ErrorCode::IncompleteAssessment,
                format!("{} of {} questions answered", responses.len(), catalog.len()),
            )
            .with_detail("answered", responses.len().to_string())
            .with_detail("total", catalog.len().to_string()));
        }
        Ok(())
    }
}
