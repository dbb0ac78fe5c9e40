//! Osteoscan
//!
//! A small web service that screens X-ray images for osteoporosis:
//! - Upload page with drag-and-drop image submission
//! - Classification endpoint backed by a replaceable analyzer
//! - Model artifact upload that gates analysis

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::{AppState, UploadPolicy};
use domain::DomainError;
use infrastructure::analysis::RandomAnalyzer;
use infrastructure::filesystem::{FsModelStore, ScratchDir};

/// Create application state from configuration.
///
/// The scratch and model directories are created when missing.
pub async fn create_app_state(config: &AppConfig) -> Result<AppState, DomainError> {
    let scratch = ScratchDir::new(&config.upload.scratch_dir);
    scratch.ensure().await?;

    let model_store = Arc::new(FsModelStore::from_config(&config.model));
    model_store.ensure_dir().await?;

    let analyzer = Arc::new(RandomAnalyzer::from_config(
        model_store.clone(),
        &config.analysis,
    ));

    Ok(AppState::new(
        analyzer,
        model_store,
        scratch,
        UploadPolicy::from_config(config),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_create_app_state_prepares_directories() {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.upload.scratch_dir = dir.path().join("scratch");
        config.model.dir = dir.path().join("nested").join("model");

        let state = create_app_state(&config).await.unwrap();

        assert!(config.upload.scratch_dir.is_dir());
        assert!(config.model.dir.is_dir());
        assert!(!state.model_store.is_ready().await.unwrap());
        assert!(state.policy.accepts_image("scan.jpeg"));
    }
}
