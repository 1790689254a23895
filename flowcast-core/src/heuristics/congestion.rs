use crate::features::FeatureRecord;
use crate::round_decimals;

/// Contribution of a peak-hour slot to the congestion score.
const PEAK_LOAD: f64 = 0.35;
/// Weekend traffic discount, applied after the peak contribution.
const WEEKEND_DISCOUNT: f64 = 0.8;

/// Rule-based congestion score in `[0.0, 1.0]`.
///
/// The path-length term saturates toward 0.1 for long routes. The
/// weekend discount deliberately scales the peak contribution too;
/// keep it after the addition.
#[allow(clippy::cast_precision_loss)]
pub fn congestion_score(features: &FeatureRecord) -> f64 {
    let len = features.path_length as f64;
    let mut score = 0.1 * len / (len + 3.0);

    if features.is_peak {
        score += PEAK_LOAD;
    }
    if features.is_weekend {
        score *= WEEKEND_DISCOUNT;
    }

    round_decimals(score.clamp(0.0, 1.0), 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(path_length: usize, is_peak: bool, is_weekend: bool) -> FeatureRecord {
        FeatureRecord {
            path_length,
            hour: if is_peak { 9 } else { 12 },
            is_peak,
            is_weekend,
        }
    }

    #[test]
    fn empty_route_scores_zero() {
        assert_eq!(congestion_score(&FeatureRecord::default()), 0.0);
    }

    #[test]
    fn peak_weekend_route() {
        // (0.1 * 7 / 10 + 0.35) * 0.8
        assert_eq!(congestion_score(&features(7, true, true)), 0.336);
    }

    #[test]
    fn weekend_discount_scales_the_peak_term() {
        // (0.0 + 0.35) * 0.8, not 0.0 * 0.8 + 0.35.
        assert_eq!(congestion_score(&features(0, true, true)), 0.28);
    }

    #[test]
    fn length_term_saturates_below_point_one() {
        let near = congestion_score(&features(50, false, false));
        assert!(near < 0.1 && near > 0.09);
    }

    #[test]
    fn output_stays_in_unit_interval() {
        for len in 0..50 {
            for is_peak in [false, true] {
                for is_weekend in [false, true] {
                    let score = congestion_score(&features(len, is_peak, is_weekend));
                    assert!((0.0..=1.0).contains(&score), "score {score} at len={len}");
                }
            }
        }
    }
}
