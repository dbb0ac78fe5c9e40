//! Success response bodies

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Body of a successful model upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelUploadResponse {
    pub success: String,
}

impl ModelUploadResponse {
    pub fn uploaded() -> Self {
        Self {
            success: "Model uploaded successfully".to_string(),
        }
    }
}

/// Service status as seen by the upload page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub model_ready: bool,
    pub model_path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_size_bytes: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_updated_at: Option<DateTime<Utc>>,
    pub max_upload_bytes: usize,
    pub allowed_extensions: Vec<String>,
}
