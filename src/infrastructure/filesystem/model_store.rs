//! Filesystem-backed model artifact store

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::ModelConfig;
use crate::domain::{DomainError, ModelStatus, ModelStore};

/// Stores the single model artifact at a fixed path.
///
/// Installs write a sibling temp file and rename it into place, so a
/// concurrent status check or analysis sees either the previous artifact or
/// the new one, never a partial write.
#[derive(Debug, Clone)]
pub struct FsModelStore {
    artifact_path: PathBuf,
}

impl FsModelStore {
    pub fn new(artifact_path: impl Into<PathBuf>) -> Self {
        Self {
            artifact_path: artifact_path.into(),
        }
    }

    pub fn from_config(config: &ModelConfig) -> Self {
        Self::new(config.artifact_path())
    }

    pub fn artifact_path(&self) -> &Path {
        &self.artifact_path
    }

    /// Creates the artifact directory if it does not exist yet
    pub async fn ensure_dir(&self) -> Result<(), DomainError> {
        if let Some(dir) = self.artifact_dir() {
            tokio::fs::create_dir_all(dir).await?;
        }

        Ok(())
    }

    fn artifact_dir(&self) -> Option<&Path> {
        self.artifact_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .artifact_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "model".to_string());

        self.artifact_path
            .with_file_name(format!(".{}.{}.tmp", name, Uuid::new_v4()))
    }

    async fn write_temp(&self, path: &Path, contents: &[u8]) -> std::io::Result<()> {
        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .await?;

        file.write_all(contents).await?;
        file.sync_all().await?;

        Ok(())
    }
}

#[async_trait]
impl ModelStore for FsModelStore {
    async fn status(&self) -> Result<ModelStatus, DomainError> {
        match tokio::fs::metadata(&self.artifact_path).await {
            Ok(meta) if meta.is_file() => Ok(ModelStatus {
                ready: true,
                path: self.artifact_path.clone(),
                size_bytes: Some(meta.len()),
                modified_at: meta.modified().ok().map(DateTime::<Utc>::from),
            }),
            Ok(_) => {
                warn!(path = %self.artifact_path.display(), "Model artifact path is not a file");
                Ok(ModelStatus::missing(self.artifact_path.clone()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Ok(ModelStatus::missing(self.artifact_path.clone()))
            }
            Err(e) => Err(DomainError::storage(format!(
                "Failed to inspect model artifact '{}': {}",
                self.artifact_path.display(),
                e
            ))),
        }
    }

    async fn install(&self, contents: Bytes) -> Result<ModelStatus, DomainError> {
        self.ensure_dir().await?;

        let temp_path = self.temp_path();
        debug!(temp = %temp_path.display(), bytes = contents.len(), "Writing model artifact");

        if let Err(e) = self.write_temp(&temp_path, &contents).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(DomainError::storage(format!("Failed to write model artifact: {}", e)));
        }

        if let Err(e) = tokio::fs::rename(&temp_path, &self.artifact_path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(DomainError::storage(format!(
                "Failed to move model artifact into place: {}",
                e
            )));
        }

        info!(
            path = %self.artifact_path.display(),
            bytes = contents.len(),
            "Model artifact installed"
        );

        self.status().await
    }
}
