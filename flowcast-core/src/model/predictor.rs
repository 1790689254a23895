use std::path::{Path, PathBuf};

use log::debug;

use super::artifact::RegressionArtifact;
use crate::error::ModelError;
use crate::features::FeatureRecord;
use crate::round_decimals;

pub const MODEL_SPEED_MIN: f64 = 15.0;
pub const MODEL_SPEED_MAX: f64 = 100.0;

/// Speed inference backed by a persisted regression artifact.
///
/// The artifact path is configured at construction. The file is loaded
/// fresh on every call, so concurrent predictions need no coordination
/// as long as nothing rewrites the artifact while serving.
#[derive(Debug, Clone)]
pub struct ModelPredictor {
    artifact_path: PathBuf,
}

impl ModelPredictor {
    pub fn new(artifact_path: impl Into<PathBuf>) -> Self {
        Self {
            artifact_path: artifact_path.into(),
        }
    }

    pub fn artifact_path(&self) -> &Path {
        &self.artifact_path
    }

    /// Produces a model-backed speed estimate for one feature record.
    ///
    /// # Errors
    ///
    /// [`ModelError::Unavailable`] when no artifact exists at the
    /// configured path, [`ModelError::Inference`] when loading or
    /// invoking it fails.
    pub fn predict(&self, features: &FeatureRecord) -> Result<f64, ModelError> {
        if !self.artifact_path.exists() {
            return Err(ModelError::Unavailable(self.artifact_path.clone()));
        }

        let artifact = RegressionArtifact::load(&self.artifact_path)?;
        let outputs = artifact.predict(&[features.to_vector()]);

        // The artifact returns one value per row; normalize the
        // sequence to a scalar before applying bounds.
        let raw = outputs
            .first()
            .copied()
            .ok_or_else(|| ModelError::Inference("artifact returned no prediction".into()))?;
        if !raw.is_finite() {
            return Err(ModelError::Inference(format!(
                "non-finite prediction: {raw}"
            )));
        }

        debug!("model prediction {raw:.3} for {features:?}");
        Ok(round_decimals(
            raw.clamp(MODEL_SPEED_MIN, MODEL_SPEED_MAX),
            1,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(artifact: &RegressionArtifact) -> (tempfile::TempDir, ModelPredictor) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        artifact.save(&path).unwrap();
        (dir, ModelPredictor::new(path))
    }

    #[test]
    fn missing_artifact_is_unavailable() {
        let predictor = ModelPredictor::new("/nonexistent/model.json");
        let err = predictor.predict(&FeatureRecord::default()).unwrap_err();
        assert!(matches!(err, ModelError::Unavailable(_)));
    }

    #[test]
    fn corrupt_artifact_is_an_inference_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");
        std::fs::write(&path, "not json at all").unwrap();

        let predictor = ModelPredictor::new(path);
        let err = predictor.predict(&FeatureRecord::default()).unwrap_err();
        assert!(matches!(err, ModelError::Inference(_)));
    }

    #[test]
    fn prediction_is_clamped_and_rounded() {
        let features = FeatureRecord {
            path_length: 4,
            hour: 9,
            is_peak: true,
            is_weekend: false,
        };

        // 200 + ... is far above the ceiling.
        let (_dir, predictor) = fixture(&RegressionArtifact::new([0.0, 0.0, 0.0, 0.0], 200.0));
        assert_eq!(predictor.predict(&features).unwrap(), MODEL_SPEED_MAX);

        let (_dir, predictor) = fixture(&RegressionArtifact::new([0.0, 0.0, 0.0, 0.0], -10.0));
        assert_eq!(predictor.predict(&features).unwrap(), MODEL_SPEED_MIN);

        // 40 + 4*1.25 + 9*0.01 = 45.09 -> one decimal.
        let (_dir, predictor) = fixture(&RegressionArtifact::new([1.25, 0.01, 0.0, 0.0], 40.0));
        assert_eq!(predictor.predict(&features).unwrap(), 45.1);
    }

    #[test]
    fn non_finite_prediction_is_rejected() {
        // Overflows to infinity for any non-empty route.
        let (_dir, predictor) =
            fixture(&RegressionArtifact::new([1e308, 0.0, 0.0, 0.0], 1e308));
        let features = FeatureRecord {
            path_length: 2,
            ..FeatureRecord::default()
        };
        let err = predictor.predict(&features).unwrap_err();
        assert!(matches!(err, ModelError::Inference(_)));
    }
}
