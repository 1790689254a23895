//! Rule-based fallback estimators.
//!
//! These run whenever the learned model is unavailable, and the
//! congestion score is always produced here regardless of which path
//! supplied the speed figure.

mod congestion;
mod speed;

pub use congestion::congestion_score;
pub use speed::{HEURISTIC_SPEED_MAX, HEURISTIC_SPEED_MIN, recommended_speed};
