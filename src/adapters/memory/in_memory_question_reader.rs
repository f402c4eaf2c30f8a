use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::catalog::{default_catalog, Category, Question, QuestionCatalog};
use crate::domain::foundation::QuestionId;
use crate::ports::{QuestionReader, StoreError};

/// Question reader over a catalog held in memory.
#[derive(Debug, Clone)]
pub struct InMemoryQuestionReader {
    catalog: Arc<QuestionCatalog>,
}

impl InMemoryQuestionReader {
    pub fn new(catalog: QuestionCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Reader over the built-in fifteen-question catalog.
    pub fn with_default_catalog() -> Self {
        Self::new(default_catalog().clone())
    }
}

impl Default for InMemoryQuestionReader {
    fn default() -> Self {
        Self::with_default_catalog()
    }
}

#[async_trait]
impl QuestionReader for InMemoryQuestionReader {
    async fn get_all(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.catalog.questions().to_vec())
    }

    async fn get_by_category(&self, category: &Category) -> Result<Vec<Question>, StoreError> {
        Ok(self.catalog.questions_in(category).cloned().collect())
    }

    async fn get_by_id(&self, id: QuestionId) -> Result<Option<Question>, StoreError> {
        Ok(self.catalog.get(id).cloned())
    }

    async fn load_catalog(&self) -> Result<QuestionCatalog, StoreError> {
        Ok(self.catalog.as_ref().clone())
    }
}
