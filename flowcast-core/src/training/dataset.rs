use std::path::Path;

use serde::Deserialize;

use crate::error::TrainingError;

/// Columns the training table must carry, in no particular order.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "path_length",
    "hour",
    "is_peak",
    "is_weekend",
    "target_speed",
];

/// One observed route/speed sample. Flags are numeric (0/1) in the
/// table, matching the feature-vector encoding.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TrainingRow {
    pub path_length: f64,
    pub hour: f64,
    pub is_peak: f64,
    pub is_weekend: f64,
    pub target_speed: f64,
}

impl TrainingRow {
    pub fn features(&self) -> [f64; 4] {
        [self.path_length, self.hour, self.is_peak, self.is_weekend]
    }
}

/// Reads the training table, validating the header before touching any
/// row data.
///
/// # Errors
///
/// [`TrainingError::MissingFile`] when the path does not exist,
/// [`TrainingError::MissingColumns`] naming the absent required
/// columns, and CSV errors for rows that fail to parse.
pub fn load_training_rows(path: &Path) -> Result<Vec<TrainingRow>, TrainingError> {
    if !path.exists() {
        return Err(TrainingError::MissingFile(path.to_path_buf()));
    }

    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !headers.iter().any(|h| h == **column))
        .map(|column| (*column).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(TrainingError::MissingColumns {
            missing,
            required: REQUIRED_COLUMNS.iter().map(|c| (*c).to_string()).collect(),
        });
    }

    let rows = reader
        .deserialize()
        .collect::<Result<Vec<TrainingRow>, _>>()?;
    if rows.is_empty() {
        return Err(TrainingError::InvalidData(
            "training file contains no rows".to_string(),
        ));
    }

    Ok(rows)
}
