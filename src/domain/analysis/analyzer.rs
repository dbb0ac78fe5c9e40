//! Analyzer trait definition

use std::fmt::Debug;
use std::path::Path;

use async_trait::async_trait;

use crate::domain::DomainError;

use super::result::AnalysisResult;

/// Produces a classification for an image stored on disk.
///
/// Request handling only depends on this trait, so the random stub can be
/// replaced by a real inference engine without touching the HTTP layer.
#[async_trait]
pub trait Analyzer: Send + Sync + Debug {
    /// Analyzes the image at `image_path`.
    ///
    /// Expected failures (missing model, undecodable image) are reported as
    /// an error-valued [`AnalysisResult`]; `Err` is reserved for unexpected
    /// faults.
    async fn analyze(&self, image_path: &Path) -> Result<AnalysisResult, DomainError>;
}
