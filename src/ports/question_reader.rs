//! Question reader port (read-only catalog access).

use async_trait::async_trait;

use super::StoreError;
use crate::domain::catalog::{Category, Question, QuestionCatalog};
use crate::domain::foundation::QuestionId;

/// Reader port for the question catalog.
#[async_trait]
pub trait QuestionReader: Send + Sync {
    /// All questions sorted by order ascending.
    async fn get_all(&self) -> Result<Vec<Question>, StoreError>;

    /// Questions of one category, in order.
    async fn get_by_category(&self, category: &Category) -> Result<Vec<Question>, StoreError>;

    /// Returns `None` if no question has this id.
    async fn get_by_id(&self, id: QuestionId) -> Result<Option<Question>, StoreError>;

    /// Loads the full catalog.
    ///
    /// # Errors
    ///
    /// - `InvalidCatalog` if question ids collide
    async fn load_catalog(&self) -> Result<QuestionCatalog, StoreError> {
        let questions = self.get_all().await?;
        QuestionCatalog::new(questions).map_err(|e| StoreError::InvalidCatalog(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_reader_is_object_safe() {
        fn _accepts_dyn(_reader: &dyn QuestionReader) {}
    }
}
