//! Assessment storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Assessment storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Which repository adapter to build
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory holding `assessments.json` for the file backend
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

/// Repository adapter selection
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Memory,
    File,
}

impl StorageConfig {
    /// Check if assessments survive a restart
    pub fn is_persistent(&self) -> bool {
        self.backend == StorageBackend::File
    }

    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.is_persistent() && self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyDataDir);
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::Memory);
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert!(!config.is_persistent());
    }

    #[test]
    fn test_file_backend_requires_data_dir() {
        let config = StorageConfig {
            backend: StorageBackend::File,
            data_dir: PathBuf::new(),
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyDataDir));
    }

    #[test]
    fn test_memory_backend_ignores_data_dir() {
        let config = StorageConfig {
            backend: StorageBackend::Memory,
            data_dir: PathBuf::new(),
        };
        assert!(config.validate().is_ok());
    }
}
