//! Training-side utility: ingests a tabular speed dataset and fits the
//! regression artifact consumed by [`crate::model::ModelPredictor`].
//!
//! Unlike the prediction path, training failures are user-visible and
//! never silently recovered.

mod dataset;
mod fit;

pub use dataset::{REQUIRED_COLUMNS, TrainingRow, load_training_rows};
pub use fit::fit_linear_regression;

use std::path::{Path, PathBuf};

use log::info;

use crate::error::TrainingError;

/// Outcome of a successful training run.
#[derive(Debug, Clone)]
pub struct TrainingReport {
    pub saved_model: PathBuf,
    pub rows: usize,
}

/// Fits a regressor from `data_path` and persists it to `model_path`.
///
/// # Errors
///
/// Any [`TrainingError`]; no artifact is written on failure.
pub fn train_model(data_path: &Path, model_path: &Path) -> Result<TrainingReport, TrainingError> {
    let rows = load_training_rows(data_path)?;
    let artifact = fit_linear_regression(&rows)?;
    artifact.save(model_path)?;

    info!(
        "fitted regression on {} rows, saved to {}",
        rows.len(),
        model_path.display()
    );
    Ok(TrainingReport {
        saved_model: model_path.to_path_buf(),
        rows: rows.len(),
    })
}
