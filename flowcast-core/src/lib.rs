//! Route speed and congestion prediction engine.
//!
//! Given a planned route (an ordered list of node identifiers) and a
//! departure time slot, produces a recommended travel speed and a
//! congestion score for a traffic-automation controller. Inference
//! prefers a persisted regression artifact and falls back to the
//! rule-based estimators whenever the model is missing or fails, so a
//! prediction request always yields a result.

pub mod error;
pub mod features;
pub mod heuristics;
pub mod model;
pub mod predict;
pub mod prelude;
pub mod training;

pub use error::{ModelError, TrainingError};

/// Rounds to a fixed number of decimal places for the wire format.
pub(crate) fn round_decimals(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
