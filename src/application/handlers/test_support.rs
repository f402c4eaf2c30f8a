//! Port mocks shared by handler tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::domain::assessment::{Assessment, AssessmentPatch, NewAssessment};
use crate::domain::catalog::{Category, Question, QuestionCatalog};
use crate::domain::foundation::{AssessmentId, QuestionId};
use crate::ports::{AssessmentRepository, QuestionReader, StoreError};

/// Repository mock backed by a vector, with switchable failures.
pub struct MockAssessmentRepository {
    assessments: Mutex<Vec<Assessment>>,
    fail_reads: bool,
    fail_writes: Mutex<bool>,
}

impl MockAssessmentRepository {
    pub fn new() -> Self {
        Self::with_assessments(vec![])
    }

    pub fn with_assessments(assessments: Vec<Assessment>) -> Self {
        Self {
            assessments: Mutex::new(assessments),
            fail_reads: false,
            fail_writes: Mutex::new(false),
        }
    }

    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::new()
        }
    }

    pub fn failing_writes() -> Self {
        let repo = Self::new();
        repo.set_fail_writes(true);
        repo
    }

    pub fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().unwrap() = fail;
    }

    pub fn stored(&self) -> Vec<Assessment> {
        self.assessments.lock().unwrap().clone()
    }

    fn check_read(&self) -> Result<(), StoreError> {
        if self.fail_reads {
            return Err(StoreError::Unavailable("simulated read failure".into()));
        }
        Ok(())
    }

    fn check_write(&self) -> Result<(), StoreError> {
        if *self.fail_writes.lock().unwrap() {
            return Err(StoreError::Unavailable("simulated write failure".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl AssessmentRepository for MockAssessmentRepository {
    async fn get_all(&self) -> Result<Vec<Assessment>, StoreError> {
        self.check_read()?;
        Ok(self.stored())
    }

    async fn find_by_id(&self, id: AssessmentId) -> Result<Option<Assessment>, StoreError> {
        self.check_read()?;
        Ok(self.stored().into_iter().find(|a| a.id() == id))
    }

    async fn create(&self, assessment: NewAssessment) -> Result<Assessment, StoreError> {
        self.check_write()?;
        let mut assessments = self.assessments.lock().unwrap();
        let id = AssessmentId::new(assessments.len() as u64 + 1);
        let created = Assessment::from_new(id, assessment);
        assessments.push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: AssessmentId, patch: AssessmentPatch) -> Result<Assessment, StoreError> {
        self.check_write()?;
        let mut assessments = self.assessments.lock().unwrap();
        let stored = assessments
            .iter_mut()
            .find(|a| a.id() == id)
            .ok_or(StoreError::NotFound(id))?;
        stored.apply(patch).map_err(|e| StoreError::Rejected(e.message))?;
        Ok(stored.clone())
    }

    async fn delete(&self, id: AssessmentId) -> Result<(), StoreError> {
        self.check_write()?;
        self.assessments.lock().unwrap().retain(|a| a.id() != id);
        Ok(())
    }
}

/// Question reader mock over a fixed catalog, or a failure.
pub struct MockQuestionReader {
    catalog: Result<QuestionCatalog, StoreError>,
}

impl MockQuestionReader {
    pub fn with_catalog(catalog: QuestionCatalog) -> Self {
        Self { catalog: Ok(catalog) }
    }

    pub fn unavailable() -> Self {
        Self {
            catalog: Err(StoreError::Unavailable("simulated catalog outage".into())),
        }
    }
}

#[async_trait]
impl QuestionReader for MockQuestionReader {
    async fn get_all(&self) -> Result<Vec<Question>, StoreError> {
        self.catalog.clone().map(|c| c.questions().to_vec())
    }

    async fn get_by_category(&self, category: &Category) -> Result<Vec<Question>, StoreError> {
        self.catalog
            .clone()
            .map(|c| c.questions_in(category).cloned().collect())
    }

    async fn get_by_id(&self, id: QuestionId) -> Result<Option<Question>, StoreError> {
        self.catalog.clone().map(|c| c.get(id).cloned())
    }
}

/// Two categories with two questions each.
pub fn two_by_two_catalog() -> QuestionCatalog {
    let q = |id: u32, c: Category| Question::new(QuestionId::new(id), c, format!("Question {}", id), id).unwrap();
    QuestionCatalog::new(vec![
        q(1, Category::ProcessEfficiency),
        q(2, Category::ProcessEfficiency),
        q(3, Category::TeamPerformance),
        q(4, Category::TeamPerformance),
    ])
    .unwrap()
}
