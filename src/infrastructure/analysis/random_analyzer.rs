//! Placeholder analyzer that gates on the model artifact and draws a random outcome

use std::ops::RangeInclusive;
use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, error, warn};

use crate::config::AnalysisConfig;
use crate::domain::{AnalysisResult, Analyzer, DomainError, ModelStore};

use super::preprocess::ImagePreprocessor;

/// Stand-in for real inference.
///
/// The image is still decoded and preprocessed so malformed uploads are
/// reported, but the classification itself is a coin flip with a confidence
/// drawn uniformly from the configured range. It has no predictive value.
#[derive(Debug)]
pub struct RandomAnalyzer {
    model_store: Arc<dyn ModelStore>,
    preprocessor: ImagePreprocessor,
    confidence: RangeInclusive<f64>,
    rng: Mutex<StdRng>,
}

impl RandomAnalyzer {
    pub fn new(
        model_store: Arc<dyn ModelStore>,
        preprocessor: ImagePreprocessor,
        confidence: RangeInclusive<f64>,
    ) -> Self {
        Self {
            model_store,
            preprocessor,
            confidence,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn from_config(model_store: Arc<dyn ModelStore>, config: &AnalysisConfig) -> Self {
        Self::new(
            model_store,
            ImagePreprocessor::new(config.input_size),
            config.confidence_min..=config.confidence_max,
        )
    }

    /// Replaces the entropy-seeded generator with a deterministic one
    pub fn with_seed(self, seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            ..self
        }
    }

    /// Returns `(is_positive, confidence)`, confidence rounded to two decimals
    fn draw(&self) -> (bool, f64) {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

        let positive = rng.gen_bool(0.5);
        let (min, max) = (*self.confidence.start(), *self.confidence.end());
        let confidence = if min < max {
            rng.gen_range(min..=max)
        } else {
            min
        };

        (positive, (confidence * 100.0).round() / 100.0)
    }
}

#[async_trait]
impl Analyzer for RandomAnalyzer {
    async fn analyze(&self, image_path: &Path) -> Result<AnalysisResult, DomainError> {
        if !self.model_store.is_ready().await? {
            warn!("Analysis requested but no model artifact is installed");
            return Ok(AnalysisResult::model_not_loaded());
        }

        let preprocessor = self.preprocessor.clone();
        let path = image_path.to_path_buf();

        let preprocessed = tokio::task::spawn_blocking(move || preprocessor.preprocess_path(&path))
            .await
            .map_err(|e| DomainError::internal(format!("Preprocessing task failed: {}", e)))?;

        match preprocessed {
            Ok(tensor) => {
                debug!(
                    width = tensor.width,
                    height = tensor.height,
                    mean = tensor.mean(),
                    "Image preprocessed"
                );
            }
            Err(e) => {
                error!(path = %image_path.display(), error = %e, "Error preprocessing image");
                return Ok(AnalysisResult::analysis_failed());
            }
        }

        let (positive, confidence) = self.draw();

        Ok(AnalysisResult::classified(positive, confidence))
    }
}
