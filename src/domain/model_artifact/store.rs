//! Model store trait definition

use std::fmt::Debug;
use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::DomainError;

/// Snapshot of the model artifact on disk
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelStatus {
    pub ready: bool,
    pub path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
}

impl ModelStatus {
    pub fn missing(path: PathBuf) -> Self {
        Self {
            ready: false,
            path,
            size_bytes: None,
            modified_at: None,
        }
    }
}

/// Narrow access to the single model artifact.
///
/// The artifact's contents are never interpreted; its presence alone gates
/// whether analysis runs. Installs replace the artifact wholesale and
/// concurrent installs are last-writer-wins.
#[async_trait]
pub trait ModelStore: Send + Sync + Debug {
    /// Current state of the artifact
    async fn status(&self) -> Result<ModelStatus, DomainError>;

    /// Replaces the artifact with `contents`
    async fn install(&self, contents: Bytes) -> Result<ModelStatus, DomainError>;

    /// Whether an artifact is present
    async fn is_ready(&self) -> Result<bool, DomainError> {
        Ok(self.status().await?.ready)
    }
}
