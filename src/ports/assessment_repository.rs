//! Assessment repository port.
//!
//! Defines the contract for persisting and retrieving Assessment aggregates.
//!
//! # Design
//!
//! - **Store-assigned ids**: `create` takes a `NewAssessment` and returns the
//!   persisted aggregate with its id
//! - **Partial updates**: `update` merges an `AssessmentPatch`
//! - **No shared mutation**: every read returns owned copies

use async_trait::async_trait;

use super::StoreError;
use crate::domain::assessment::{Assessment, AssessmentPatch, NewAssessment};
use crate::domain::foundation::AssessmentId;

/// Repository port for Assessment persistence.
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// All stored assessments, in id order.
    async fn get_all(&self) -> Result<Vec<Assessment>, StoreError>;

    /// Find an assessment by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: AssessmentId) -> Result<Option<Assessment>, StoreError>;

    /// Persist a new assessment and assign its id.
    async fn create(&self, assessment: NewAssessment) -> Result<Assessment, StoreError>;

    /// Merge a partial update into an existing assessment.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the assessment doesn't exist
    /// - `Rejected` if the assessment is already completed
    async fn update(&self, id: AssessmentId, patch: AssessmentPatch) -> Result<Assessment, StoreError>;

    /// Delete an assessment.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the assessment doesn't exist
    async fn delete(&self, id: AssessmentId) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assessment_repository_is_object_safe() {
        fn _accepts_dyn(_repo: &dyn AssessmentRepository) {}
    }
}
