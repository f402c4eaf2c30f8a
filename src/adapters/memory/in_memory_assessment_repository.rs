//! In-Memory Assessment Repository
//!
//! Stores assessments in a map keyed by id. Ids are assigned as one past
//! the largest id ever stored.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::{Assessment, AssessmentPatch, NewAssessment};
use crate::domain::foundation::AssessmentId;
use crate::ports::{AssessmentRepository, StoreError};

#[derive(Debug, Default)]
struct Inner {
    assessments: BTreeMap<AssessmentId, Assessment>,
    last_id: AssessmentId,
}

/// In-memory storage for assessments
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssessmentRepository {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryAssessmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the repository with existing assessments.
    pub fn with_assessments(assessments: impl IntoIterator<Item = Assessment>) -> Self {
        let assessments: BTreeMap<AssessmentId, Assessment> =
            assessments.into_iter().map(|a| (a.id(), a)).collect();
        let last_id = assessments.keys().next_back().copied().unwrap_or_default();
        Self {
            inner: Arc::new(RwLock::new(Inner { assessments, last_id })),
        }
    }

    /// Number of stored assessments
    pub async fn len(&self) -> usize {
        self.inner.read().await.assessments.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.inner.write().await.assessments.clear();
    }
}

#[async_trait]
impl AssessmentRepository for InMemoryAssessmentRepository {
    async fn get_all(&self) -> Result<Vec<Assessment>, StoreError> {
        Ok(self.inner.read().await.assessments.values().cloned().collect())
    }

    async fn find_by_id(&self, id: AssessmentId) -> Result<Option<Assessment>, StoreError> {
        Ok(self.inner.read().await.assessments.get(&id).cloned())
    }

    async fn create(&self, assessment: NewAssessment) -> Result<Assessment, StoreError> {
        let mut inner = self.inner.write().await;
        let id = inner.last_id.next();
        let created = Assessment::from_new(id, assessment);
        inner.assessments.insert(id, created.clone());
        inner.last_id = id;
        Ok(created)
    }

    async fn update(&self, id: AssessmentId, patch: AssessmentPatch) -> Result<Assessment, StoreError> {
        let mut inner = self.inner.write().await;
        let stored = inner.assessments.get_mut(&id).ok_or(StoreError::NotFound(id))?;

        let mut updated = stored.clone();
        updated
            .apply(patch)
            .map_err(|e| StoreError::Rejected(e.message))?;
        *stored = updated.clone();
        Ok(updated)
    }

    async fn delete(&self, id: AssessmentId) -> Result<(), StoreError> {
        self.inner
            .write()
            .await
            .assessments
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{Response, ResponseSet, ResponseValue};
    use crate::domain::foundation::{AssessmentStatus, QuestionId, Timestamp};

    fn new_assessment() -> NewAssessment {
        NewAssessment::start(Timestamp::from_unix_secs(1_700_000_000))
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let repo = InMemoryAssessmentRepository::new();
        let first = repo.create(new_assessment()).await.unwrap();
        let second = repo.create(new_assessment()).await.unwrap();

        assert_eq!(first.id(), AssessmentId::new(1));
        assert_eq!(second.id(), AssessmentId::new(2));
        assert_eq!(repo.len().await, 2);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = InMemoryAssessmentRepository::new();
        repo.create(new_assessment()).await.unwrap();
        let second = repo.create(new_assessment()).await.unwrap();
        repo.delete(second.id()).await.unwrap();

        let third = repo.create(new_assessment()).await.unwrap();
        assert_eq!(third.id(), AssessmentId::new(3));
    }

    #[tokio::test]
    async fn seeded_repository_continues_after_largest_id() {
        let seeded = Assessment::from_new(AssessmentId::new(41), new_assessment());
        let repo = InMemoryAssessmentRepository::with_assessments(vec![seeded]);
        let created = repo.create(new_assessment()).await.unwrap();
        assert_eq!(created.id(), AssessmentId::new(42));
    }

    #[tokio::test]
    async fn find_missing_returns_none() {
        let repo = InMemoryAssessmentRepository::new();
        assert!(repo.find_by_id(AssessmentId::new(9)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_merges_patch() {
        let repo = InMemoryAssessmentRepository::new();
        let created = repo.create(new_assessment()).await.unwrap();
        let response = Response::new(
            QuestionId::new(1),
            ResponseValue::try_new(4).unwrap(),
            Timestamp::now(),
        );

        let updated = repo
            .update(
                created.id(),
                AssessmentPatch::completion(ResponseSet::from(vec![response]), Timestamp::now()),
            )
            .await
            .unwrap();

        assert_eq!(updated.status(), AssessmentStatus::Completed);
        let stored = repo.find_by_id(created.id()).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn update_of_completed_is_rejected() {
        let repo = InMemoryAssessmentRepository::new();
        let created = repo.create(new_assessment()).await.unwrap();
        repo.update(created.id(), AssessmentPatch::completion(ResponseSet::new(), Timestamp::now()))
            .await
            .unwrap();

        let result = repo
            .update(
                created.id(),
                AssessmentPatch {
                    responses: Some(ResponseSet::new()),
                    ..AssessmentPatch::default()
                },
            )
            .await;
        assert!(matches!(result, Err(StoreError::Rejected(_))));
    }

    #[tokio::test]
    async fn update_missing_is_not_found() {
        let repo = InMemoryAssessmentRepository::new();
        let result = repo
            .update(AssessmentId::new(5), AssessmentPatch::default())
            .await;
        assert_eq!(result, Err(StoreError::NotFound(AssessmentId::new(5))));
    }

    #[tokio::test]
    async fn get_all_returns_copies_in_id_order() {
        let repo = InMemoryAssessmentRepository::new();
        for _ in 0..3 {
            repo.create(new_assessment()).await.unwrap();
        }
        let ids: Vec<u64> = repo
            .get_all()
            .await
            .unwrap()
            .iter()
            .map(|a| a.id().value())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
