//! YAML Question Reader
//!
//! Serves the question catalog from a YAML file of the form:
//!
//! ```yaml
//! questions:
//!   - id: 1
//!     category: Process Efficiency
//!     text: How well documented are your core processes?
//!     order: 1
//!     weight: 1   # optional
//! ```
//!
//! The file is re-read on every call so edits show up without a restart and
//! an unreadable file surfaces as a retryable error at fetch time.

use async_trait::async_trait;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

use crate::domain::catalog::{Category, Question, QuestionCatalog};
use crate::domain::foundation::QuestionId;
use crate::ports::{QuestionReader, StoreError};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    questions: Vec<Question>,
}

/// File-backed question reader
#[derive(Debug, Clone)]
pub struct YamlQuestionReader {
    path: PathBuf,
}

impl YamlQuestionReader {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_catalog(&self) -> Result<QuestionCatalog, StoreError> {
        let yaml = fs::read_to_string(&self.path).await.map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "catalog file unreadable");
            StoreError::Unavailable(format!("{}: {}", self.path.display(), e))
        })?;

        let file: CatalogFile = serde_yaml::from_str(&yaml)?;
        if file.questions.iter().any(|q| q.text().trim().is_empty()) {
            return Err(StoreError::InvalidCatalog("question text must not be blank".into()));
        }

        let catalog =
            QuestionCatalog::new(file.questions).map_err(|e| StoreError::InvalidCatalog(e.to_string()))?;
        debug!(path = %self.path.display(), questions = catalog.len(), "catalog loaded");
        Ok(catalog)
    }
}

#[async_trait]
impl QuestionReader for YamlQuestionReader {
    async fn get_all(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.read_catalog().await?.questions().to_vec())
    }

    async fn get_by_category(&self, category: &Category) -> Result<Vec<Question>, StoreError> {
        Ok(self
            .read_catalog()
            .await?
            .questions_in(category)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: QuestionId) -> Result<Option<Question>, StoreError> {
        Ok(self.read_catalog().await?.get(id).cloned())
    }

    async fn load_catalog(&self) -> Result<QuestionCatalog, StoreError> {
        self.read_catalog().await
    }
}
