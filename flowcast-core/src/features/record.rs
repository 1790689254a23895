use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Normalized per-request features consumed by both the heuristic
/// estimators and the learned model.
///
/// On the wire the two flags are encoded as `0 | 1` integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureRecord {
    /// Number of nodes on the planned route.
    pub path_length: usize,
    /// Hour of day in `0..=23`, or [`FeatureRecord::NO_HOUR`] when the
    /// slot carried no usable time information.
    pub hour: i32,
    #[serde(serialize_with = "ser_flag", deserialize_with = "de_flag")]
    pub is_peak: bool,
    #[serde(serialize_with = "ser_flag", deserialize_with = "de_flag")]
    pub is_weekend: bool,
}

impl FeatureRecord {
    /// Sentinel hour for "no valid time information available".
    pub const NO_HOUR: i32 = -1;

    /// Fixed-order numeric encoding fed to the model artifact:
    /// `[path_length, hour, is_peak, is_weekend]`.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_vector(self) -> [f64; 4] {
        [
            self.path_length as f64,
            f64::from(self.hour),
            f64::from(u8::from(self.is_peak)),
            f64::from(u8::from(self.is_weekend)),
        ]
    }
}

impl Default for FeatureRecord {
    fn default() -> Self {
        Self {
            path_length: 0,
            hour: Self::NO_HOUR,
            is_peak: false,
            is_weekend: false,
        }
    }
}

fn ser_flag<S: Serializer>(flag: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(u8::from(*flag))
}

fn de_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(u8::deserialize(deserializer)? != 0)
}

#[cfg(test)]
mod tests {
    use super::FeatureRecord;

    #[test]
    fn flags_serialize_as_integers() {
        let record = FeatureRecord {
            path_length: 7,
            hour: 9,
            is_peak: true,
            is_weekend: false,
        };
        let value = serde_json::to_value(record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "path_length": 7,
                "hour": 9,
                "is_peak": 1,
                "is_weekend": 0,
            })
        );
    }

    #[test]
    fn feature_vector_layout_is_fixed() {
        let record = FeatureRecord {
            path_length: 12,
            hour: 18,
            is_peak: true,
            is_weekend: true,
        };
        assert_eq!(record.to_vector(), [12.0, 18.0, 1.0, 1.0]);
        assert_eq!(FeatureRecord::default().to_vector(), [0.0, -1.0, 0.0, 0.0]);
    }
}
