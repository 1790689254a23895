//! Prediction orchestration: one model attempt, heuristic fallback.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;
use crate::features::{FeatureRecord, extract_features};
use crate::heuristics::{congestion_score, recommended_speed};
use crate::model::ModelPredictor;

/// Incoming request payload.
///
/// `datetime` is a legacy synonym for `slot`, honored only when `slot`
/// is absent. Callers treat an unparsable payload as the default
/// (empty) request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictionRequest {
    #[serde(default)]
    pub path: Option<Vec<String>>,
    #[serde(default)]
    pub slot: Option<String>,
    #[serde(default)]
    pub datetime: Option<String>,
}

impl PredictionRequest {
    fn slot(&self) -> Option<&str> {
        self.slot.as_deref().or(self.datetime.as_deref())
    }
}

/// Outgoing response payload, including the extracted features for
/// diagnostics.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    pub recommended_speed: f64,
    pub congestion_score: f64,
    pub model_used: bool,
    pub reason: String,
    pub features: FeatureRecord,
}

/// Composes feature extraction, model inference and the heuristic
/// estimators into a single infallible prediction.
#[derive(Debug, Clone)]
pub struct PredictionOrchestrator {
    predictor: ModelPredictor,
}

impl PredictionOrchestrator {
    pub fn new(predictor: ModelPredictor) -> Self {
        Self { predictor }
    }

    /// Runs one prediction.
    ///
    /// A single model attempt, no retries; any [`ModelError`] falls
    /// back to the heuristic speed. The congestion score is always
    /// heuristic since the model only ever supplies the speed figure.
    pub fn predict(&self, request: &PredictionRequest) -> PredictionResult {
        let features = extract_features(request.path.as_deref(), request.slot());
        let congestion = congestion_score(&features);

        match self.predictor.predict(&features) {
            Ok(speed) => PredictionResult {
                recommended_speed: speed,
                congestion_score: congestion,
                model_used: true,
                reason: String::from("model"),
                features,
            },
            Err(err) => {
                debug!("falling back to heuristics: {err}");
                let reason = match err {
                    ModelError::Unavailable(_) => String::from("heuristic"),
                    ModelError::Inference(msg) => format!("heuristic (model error: {msg})"),
                };
                PredictionResult {
                    recommended_speed: recommended_speed(&features),
                    congestion_score: congestion,
                    model_used: false,
                    reason,
                    features,
                }
            }
        }
    }
}
