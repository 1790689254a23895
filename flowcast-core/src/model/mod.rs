//! Learned-model inference backed by a persisted regression artifact.

mod artifact;
mod predictor;

pub use artifact::{ARTIFACT_VERSION, FEATURE_ARITY, RegressionArtifact};
pub use predictor::{MODEL_SPEED_MAX, MODEL_SPEED_MIN, ModelPredictor};
