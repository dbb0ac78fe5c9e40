//! Application state for shared services

use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::{Analyzer, ModelStore, has_allowed_extension};
use crate::infrastructure::filesystem::ScratchDir;

/// Limits and whitelists applied to incoming uploads
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub allowed_extensions: Vec<String>,
    pub model_extension: String,
    pub max_body_size: usize,
}

impl UploadPolicy {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            allowed_extensions: config.upload.allowed_extensions.clone(),
            model_extension: config.model.artifact_extension.clone(),
            max_body_size: config.upload.max_body_size,
        }
    }

    pub fn accepts_image(&self, filename: &str) -> bool {
        has_allowed_extension(filename, &self.allowed_extensions)
    }

    pub fn accepts_model(&self, filename: &str) -> bool {
        has_allowed_extension(filename, std::slice::from_ref(&self.model_extension))
    }
}

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<dyn Analyzer>,
    pub model_store: Arc<dyn ModelStore>,
    pub scratch: ScratchDir,
    pub policy: Arc<UploadPolicy>,
}

impl AppState {
    pub fn new(
        analyzer: Arc<dyn Analyzer>,
        model_store: Arc<dyn ModelStore>,
        scratch: ScratchDir,
        policy: UploadPolicy,
    ) -> Self {
        Self {
            analyzer,
            model_store,
            scratch,
            policy: Arc::new(policy),
        }
    }
}
