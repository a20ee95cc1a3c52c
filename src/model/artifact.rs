//! Serialized logistic regression artifact and its validation rules.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{SurvivalModel, Verdict, sigmoid};
use crate::passenger::{FEATURE_LEN, FEATURE_NAMES, FeatureVector};

/// Class labels in artifact order; index 1 is the positive class.
pub const CLASS_LABELS: [&str; 2] = ["did_not_survive", "survived"];

/// Errors raised while loading or validating a classifier artifact.
#[derive(Debug, Error)]
pub enum ArtifactError {
    /// Failed to read an artifact file.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
    /// Failed to parse artifact JSON.
    #[error("Invalid artifact at {path}: {source}")]
    Parse {
        /// JSON file path.
        path: PathBuf,
        /// JSON parse error.
        source: serde_json::Error,
    },
    /// Artifact contents do not fit this classifier.
    #[error("Unusable artifact at {path}: {reason}")]
    Invalid {
        /// JSON file path.
        path: PathBuf,
        /// First validation rule that failed.
        reason: String,
    },
}

/// Versioned logistic regression coefficients for passenger features.
///
/// One weight per column of [`FEATURE_NAMES`], applied to the raw feature
/// values; the training pipeline did not scale its inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticArtifact {
    /// Stable identifier of the trained model.
    pub model_id: String,
    /// Monotonic artifact revision.
    pub model_version: i64,
    /// Expected feature columns, in weight order.
    pub feature_names: Vec<String>,
    /// Class labels; the second entry is the survival class.
    pub classes: Vec<String>,
    /// Per-feature coefficients.
    pub weights: Vec<f32>,
    /// Bias term added to the weighted sum.
    pub intercept: f32,
}

impl LogisticArtifact {
    /// Load and validate an artifact from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self, ArtifactError> {
        let text = fs::read_to_string(path).map_err(|source| ArtifactError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact: Self = serde_json::from_str(&text).map_err(|source| ArtifactError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        artifact
            .validate()
            .map_err(|reason| ArtifactError::Invalid {
                path: path.to_path_buf(),
                reason,
            })?;
        Ok(artifact)
    }

    /// Validate column layout, class labels, and coefficient values.
    pub fn validate(&self) -> Result<(), String> {
        if self.model_id.trim().is_empty() {
            return Err("model_id is empty".to_string());
        }
        if self.feature_names.len() != FEATURE_LEN {
            return Err(format!(
                "Expected {FEATURE_LEN} feature columns, got {}",
                self.feature_names.len()
            ));
        }
        for (expected, actual) in FEATURE_NAMES.iter().zip(&self.feature_names) {
            if actual != expected {
                return Err(format!(
                    "Unsupported feature column {actual} (expected {expected})"
                ));
            }
        }
        if self.classes.len() != CLASS_LABELS.len() {
            return Err(format!(
                "Expected {} classes, got {}",
                CLASS_LABELS.len(),
                self.classes.len()
            ));
        }
        for (expected, actual) in CLASS_LABELS.iter().zip(&self.classes) {
            if actual != expected {
                return Err(format!("Unsupported class {actual} (expected {expected})"));
            }
        }
        if self.weights.len() != FEATURE_LEN {
            return Err("weights length mismatch".to_string());
        }
        if self.weights.iter().any(|w| !w.is_finite()) {
            return Err("weights must be finite".to_string());
        }
        if !self.intercept.is_finite() {
            return Err("intercept must be finite".to_string());
        }
        Ok(())
    }

    /// Short "id vN" tag for status lines.
    pub fn tag(&self) -> String {
        format!("{} v{}", self.model_id, self.model_version)
    }

    fn decision_value(&self, features: &FeatureVector) -> f32 {
        let mut sum = self.intercept;
        for (weight, value) in self.weights.iter().zip(features.values()) {
            sum += weight * value;
        }
        sum
    }
}

impl SurvivalModel for LogisticArtifact {
    fn survival_probability(&self, features: &FeatureVector) -> f32 {
        sigmoid(self.decision_value(features))
    }

    // A zero decision threshold is the same cut as probability 0.5.
    fn classify(&self, features: &FeatureVector) -> Verdict {
        if self.decision_value(features) >= 0.0 {
            Verdict::Survived
        } else {
            Verdict::DidNotSurvive
        }
    }
}
