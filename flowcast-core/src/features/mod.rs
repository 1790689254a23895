//! Feature extraction from a raw route and time slot.

mod record;

pub use record::FeatureRecord;

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike, Weekday};

/// Peak traffic windows, hours inclusive.
const MORNING_PEAK: (u32, u32) = (8, 10);
const EVENING_PEAK: (u32, u32) = (17, 19);

/// Turns a raw route and slot into a [`FeatureRecord`].
///
/// Never fails: an absent route counts as empty, and a missing or
/// unparsable slot degrades to the no-time defaults.
pub fn extract_features(path: Option<&[String]>, slot: Option<&str>) -> FeatureRecord {
    let path_length = path.map_or(0, <[String]>::len);

    let Some((hour, weekday)) = slot.filter(|s| !s.is_empty()).and_then(parse_slot) else {
        return FeatureRecord {
            path_length,
            ..FeatureRecord::default()
        };
    };

    FeatureRecord {
        path_length,
        hour: hour as i32,
        is_peak: is_peak_hour(hour),
        is_weekend: matches!(weekday, Weekday::Sat | Weekday::Sun),
    }
}

/// Accepts RFC 3339 date-times, then naive date-times without an
/// offset (`T` or space separated, optional fractional seconds).
fn parse_slot(slot: &str) -> Option<(u32, Weekday)> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(slot) {
        return Some((dt.hour(), dt.weekday()));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(slot, fmt).ok())
        .map(|dt| (dt.hour(), dt.weekday()))
}

fn is_peak_hour(hour: u32) -> bool {
    (MORNING_PEAK.0..=MORNING_PEAK.1).contains(&hour)
        || (EVENING_PEAK.0..=EVENING_PEAK.1).contains(&hour)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(len: usize) -> Vec<String> {
        (0..len).map(|i| format!("n{i}")).collect()
    }

    #[test]
    fn empty_request_defaults() {
        let features = extract_features(None, None);
        assert_eq!(features, FeatureRecord::default());

        let features = extract_features(Some(&[]), Some(""));
        assert_eq!(features.path_length, 0);
        assert_eq!(features.hour, FeatureRecord::NO_HOUR);
        assert!(!features.is_peak);
        assert!(!features.is_weekend);
    }

    #[test]
    fn unparsable_slot_degrades_to_defaults() {
        let path = route(4);
        let features = extract_features(Some(&path), Some("next tuesday-ish"));
        assert_eq!(features.path_length, 4);
        assert_eq!(features.hour, FeatureRecord::NO_HOUR);
        assert!(!features.is_peak);
        assert!(!features.is_weekend);
    }

    #[test]
    fn sunday_morning_peak() {
        // 2025-10-12 is a Sunday.
        let path = route(7);
        let features = extract_features(Some(&path), Some("2025-10-12T09:30:00"));
        assert_eq!(features.path_length, 7);
        assert_eq!(features.hour, 9);
        assert!(features.is_peak);
        assert!(features.is_weekend);
    }

    #[test]
    fn rfc3339_offset_is_accepted() {
        // 2025-10-13 is a Monday.
        let features = extract_features(None, Some("2025-10-13T17:00:00+02:00"));
        assert_eq!(features.hour, 17);
        assert!(features.is_peak);
        assert!(!features.is_weekend);
    }

    #[test]
    fn space_separated_slot_is_accepted() {
        let features = extract_features(None, Some("2025-10-13 12:15:00"));
        assert_eq!(features.hour, 12);
        assert!(!features.is_peak);
    }

    #[test]
    fn peak_window_boundaries() {
        for (hour, expected) in [
            (7, false),
            (8, true),
            (10, true),
            (11, false),
            (16, false),
            (17, true),
            (19, true),
            (20, false),
        ] {
            let slot = format!("2025-10-15T{hour:02}:00:00");
            let features = extract_features(None, Some(&slot));
            assert_eq!(features.is_peak, expected, "hour {hour}");
        }
    }
}
