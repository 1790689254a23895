// Re-export key components
pub use crate::error::{ModelError, TrainingError};
pub use crate::features::{FeatureRecord, extract_features};
pub use crate::heuristics::{congestion_score, recommended_speed};
pub use crate::model::{ModelPredictor, RegressionArtifact};
pub use crate::predict::{PredictionOrchestrator, PredictionRequest, PredictionResult};
pub use crate::training::{TrainingReport, train_model};
