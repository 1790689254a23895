use std::path::PathBuf;

use thiserror::Error;

/// Failures of the learned-model inference path. Every variant is
/// recoverable: the orchestrator answers with the heuristic estimators
/// instead of surfacing these to the caller.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("model artifact not found: {0}")]
    Unavailable(PathBuf),
    #[error("inference failed: {0}")]
    Inference(String),
}

/// Failures of the training utility. Unlike [`ModelError`] these are
/// user-visible and terminate the training run.
#[derive(Error, Debug)]
pub enum TrainingError {
    #[error("training file not found: {0}")]
    MissingFile(PathBuf),
    #[error("training data missing required columns {missing:?} (required: {required:?})")]
    MissingColumns {
        missing: Vec<String>,
        required: Vec<String>,
    },
    #[error("invalid training data: {0}")]
    InvalidData(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}
