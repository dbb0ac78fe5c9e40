//! Classification result returned to clients

use serde::{Deserialize, Serialize};

const CONDITION_POSITIVE: &str = "Osteoporosis detected";
const CONDITION_NEGATIVE: &str = "No Osteoporosis detected";
const RECOMMENDATION_POSITIVE: &str =
    "Please consult with your healthcare provider for confirmation.";
const RECOMMENDATION_NEGATIVE: &str = "Regular check-ups recommended.";

/// Outcome of a single analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Positive,
    Negative,
    Error,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value object produced fresh for every analysis request.
///
/// `confidence` is always within `[0, 1]`; error results carry `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub result: Outcome,
    pub confidence: f64,
    pub condition: String,
    pub recommendation: String,
}

impl AnalysisResult {
    /// A classification with the condition and recommendation implied by the outcome
    pub fn classified(positive: bool, confidence: f64) -> Self {
        let (result, condition, recommendation) = if positive {
            (Outcome::Positive, CONDITION_POSITIVE, RECOMMENDATION_POSITIVE)
        } else {
            (Outcome::Negative, CONDITION_NEGATIVE, RECOMMENDATION_NEGATIVE)
        };

        Self {
            result,
            confidence: confidence.clamp(0.0, 1.0),
            condition: condition.to_string(),
            recommendation: recommendation.to_string(),
        }
    }

    /// Result returned when no model artifact is installed
    pub fn model_not_loaded() -> Self {
        Self::error(
            "Error: Model not loaded",
            "Please ensure the model file is properly uploaded.",
        )
    }

    /// Result returned when the image could not be preprocessed
    pub fn analysis_failed() -> Self {
        Self::error(
            "Error during analysis",
            "Please try again with a different image or contact support.",
        )
    }

    fn error(condition: &str, recommendation: &str) -> Self {
        Self {
            result: Outcome::Error,
            confidence: 0.0,
            condition: condition.to_string(),
            recommendation: recommendation.to_string(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.result == Outcome::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_classification() {
        let result = AnalysisResult::classified(true, 0.82);
        assert_eq!(result.result, Outcome::Positive);
        assert_eq!(result.condition, "Osteoporosis detected");
        assert_eq!(
            result.recommendation,
            "Please consult with your healthcare provider for confirmation."
        );
    }

    #[test]
    fn test_negative_classification() {
        let result = AnalysisResult::classified(false, 0.75);
        assert_eq!(result.result, Outcome::Negative);
        assert_eq!(result.condition, "No Osteoporosis detected");
        assert_eq!(result.recommendation, "Regular check-ups recommended.");
    }

    #[test]
    fn test_confidence_is_clamped() {
        assert_eq!(AnalysisResult::classified(true, 1.4).confidence, 1.0);
        assert_eq!(AnalysisResult::classified(false, -0.2).confidence, 0.0);
    }

    #[test]
    fn test_model_not_loaded() {
        let result = AnalysisResult::model_not_loaded();
        assert!(result.is_error());
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.condition, "Error: Model not loaded");
    }

    #[test]
    fn test_serialization_shape() {
        let json = serde_json::to_value(AnalysisResult::classified(false, 0.8)).unwrap();
        assert_eq!(json["result"], "negative");
        assert_eq!(json["confidence"], 0.8);
        assert_eq!(json["condition"], "No Osteoporosis detected");
        assert!(json.get("recommendation").is_some());
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Positive.to_string(), "positive");
        assert_eq!(Outcome::Negative.to_string(), "negative");
        assert_eq!(Outcome::Error.to_string(), "error");
    }
}
