use std::fs::File;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Artifact format version accepted by this build.
pub const ARTIFACT_VERSION: u32 = 1;
/// Arity of the fixed feature layout `[path_length, hour, is_peak, is_weekend]`.
pub const FEATURE_ARITY: usize = 4;

/// Persisted linear regression over the fixed feature layout.
///
/// The file is owned by the training utility and only ever read during
/// serving. The inference contract is: one numeric prediction per
/// submitted feature row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionArtifact {
    pub version: u32,
    pub weights: Vec<f64>,
    pub intercept: f64,
}

impl RegressionArtifact {
    pub fn new(weights: [f64; FEATURE_ARITY], intercept: f64) -> Self {
        Self {
            version: ARTIFACT_VERSION,
            weights: weights.to_vec(),
            intercept,
        }
    }

    /// Reads and validates an artifact file.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Inference`] when the file cannot be read,
    /// parsed, or does not match the expected shape.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let file = File::open(path).map_err(|e| {
            ModelError::Inference(format!("failed to open artifact '{}': {e}", path.display()))
        })?;
        let artifact: Self = serde_json::from_reader(file)
            .map_err(|e| ModelError::Inference(format!("failed to parse artifact: {e}")))?;

        if artifact.version != ARTIFACT_VERSION {
            return Err(ModelError::Inference(format!(
                "unsupported artifact version {}",
                artifact.version
            )));
        }
        if artifact.weights.len() != FEATURE_ARITY {
            return Err(ModelError::Inference(format!(
                "expected {FEATURE_ARITY} weights, got {}",
                artifact.weights.len()
            )));
        }

        Ok(artifact)
    }

    /// Persists the artifact as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// One prediction per input row.
    pub fn predict(&self, rows: &[[f64; FEATURE_ARITY]]) -> Vec<f64> {
        rows.iter()
            .map(|row| {
                self.intercept
                    + row
                        .iter()
                        .zip(&self.weights)
                        .map(|(x, w)| x * w)
                        .sum::<f64>()
            })
            .collect()
    }
}
