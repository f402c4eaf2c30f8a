//! File-based Assessment Repository
//!
//! Keeps every assessment in a single JSON document under the data
//! directory. Writes go to a temporary file first and are then renamed over
//! the original, so a crash mid-write leaves the previous document intact.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use crate::domain::assessment::{Assessment, AssessmentPatch, NewAssessment};
use crate::domain::foundation::AssessmentId;
use crate::ports::{AssessmentRepository, StoreError};

const STORE_FILE: &str = "assessments.json";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreDocument {
    last_id: AssessmentId,
    assessments: Vec<Assessment>,
}

impl StoreDocument {
    fn position(&self, id: AssessmentId) -> Option<usize> {
        self.assessments.iter().position(|a| a.id() == id)
    }
}

/// File-based storage for assessments
#[derive(Debug)]
pub struct FileAssessmentRepository {
    base_path: PathBuf,
    /// Serializes read-modify-write cycles.
    write_lock: Mutex<()>,
}

impl FileAssessmentRepository {
    /// Create a repository rooted at `base_path`.
    ///
    /// The directory is created on first write.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the JSON document
    pub fn store_file_path(&self) -> PathBuf {
        self.base_path.join(STORE_FILE)
    }

    async fn load(&self) -> Result<StoreDocument, StoreError> {
        let path = self.store_file_path();
        if !path.exists() {
            return Ok(StoreDocument::default());
        }
        let json = fs::read_to_string(&path).await?;
        Ok(serde_json::from_str(&json)?)
    }

    async fn save(&self, document: &StoreDocument) -> Result<(), StoreError> {
        fs::create_dir_all(&self.base_path).await?;

        let json = serde_json::to_string_pretty(document)?;
        let tmp = self.base_path.join(format!("{}.tmp", STORE_FILE));
        fs::write(&tmp, json).await?;
        fs::rename(&tmp, self.store_file_path()).await?;

        debug!(count = document.assessments.len(), "assessment store written");
        Ok(())
    }
}

#[async_trait]
impl AssessmentRepository for FileAssessmentRepository {
    async fn get_all(&self) -> Result<Vec<Assessment>, StoreError> {
        let mut assessments = self.load().await?.assessments;
        assessments.sort_by_key(Assessment::id);
        Ok(assessments)
    }

    async fn find_by_id(&self, id: AssessmentId) -> Result<Option<Assessment>, StoreError> {
        Ok(self
            .load()
            .await?
            .assessments
            .into_iter()
            .find(|a| a.id() == id))
    }

    async fn create(&self, assessment: NewAssessment) -> Result<Assessment, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.load().await?;

        let id = document.last_id.next();
        let created = Assessment::from_new(id, assessment);
        document.assessments.push(created.clone());
        document.last_id = id;

        self.save(&document).await?;
        Ok(created)
    }

    async fn update(&self, id: AssessmentId, patch: AssessmentPatch) -> Result<Assessment, StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.load().await?;
        let index = document.position(id).ok_or(StoreError::NotFound(id))?;

        let mut updated = document.assessments[index].clone();
        updated
            .apply(patch)
            .map_err(|e| StoreError::Rejected(e.message))?;
        document.assessments[index] = updated.clone();

        self.save(&document).await?;
        Ok(updated)
    }

    async fn delete(&self, id: AssessmentId) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.load().await?;
        let index = document.position(id).ok_or(StoreError::NotFound(id))?;
        document.assessments.remove(index);
        self.save(&document).await
    }
}
