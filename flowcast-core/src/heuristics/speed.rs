use crate::features::FeatureRecord;
use crate::round_decimals;

pub const HEURISTIC_SPEED_MIN: f64 = 20.0;
pub const HEURISTIC_SPEED_MAX: f64 = 80.0;

const BASELINE: f64 = 50.0;
const PEAK_PENALTY: f64 = 18.0;
const WEEKEND_BONUS: f64 = 4.0;
const LONG_PATH_PENALTY: f64 = 8.0;
const SHORT_PATH_BONUS: f64 = 6.0;

const LONG_PATH_LEN: usize = 6;
const VERY_LONG_PATH_LEN: usize = 10;
const SHORT_PATH_LEN: usize = 2;

/// Rule-based speed recommendation in km/h.
///
/// Additive adjustments on a fixed baseline; the two long-path
/// penalties stack once the route crosses both thresholds. Clamped to
/// `[20.0, 80.0]` and rounded to one decimal.
pub fn recommended_speed(features: &FeatureRecord) -> f64 {
    let mut speed = BASELINE;

    if features.is_peak {
        speed -= PEAK_PENALTY;
    }
    if features.is_weekend {
        speed += WEEKEND_BONUS;
    }
    if features.path_length >= LONG_PATH_LEN {
        speed -= LONG_PATH_PENALTY;
    }
    if features.path_length >= VERY_LONG_PATH_LEN {
        speed -= LONG_PATH_PENALTY;
    }
    if features.path_length <= SHORT_PATH_LEN {
        speed += SHORT_PATH_BONUS;
    }

    round_decimals(speed.clamp(HEURISTIC_SPEED_MIN, HEURISTIC_SPEED_MAX), 1)
}
