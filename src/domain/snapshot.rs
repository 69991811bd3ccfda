//! Snapshot - Aggregate Tile Readings

use serde::{Deserialize, Serialize};

/// A point-in-time aggregate of tile readings returned by the backend.
///
/// Every field is optional from this layer's perspective; a field the
/// backend omits renders as a placeholder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    /// Total number of readings
    #[serde(default)]
    pub count: Option<u64>,
    /// Average power in mW
    #[serde(default)]
    pub avg_power: Option<f64>,
    /// Maximum power in mW
    #[serde(default)]
    pub max_power: Option<f64>,
    /// Minimum power in mW
    #[serde(default)]
    pub min_power: Option<f64>,
}

/// Normalized gauge quantity in [0, 1]: average power relative to the
/// observed maximum.
///
/// An absent snapshot contributes an average of 0 and a maximum of 1, so
/// the result is finite before the first load. A zero maximum yields 0.
pub fn gauge_ratio(snapshot: Option<&StatsSnapshot>) -> f64 {
    let avg = snapshot.and_then(|s| s.avg_power).unwrap_or(0.0);
    let max = snapshot.and_then(|s| s.max_power).unwrap_or(1.0);
    if max == 0.0 {
        return 0.0;
    }
    (avg / max).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(avg: f64, max: f64) -> StatsSnapshot {
        StatsSnapshot {
            count: Some(1),
            avg_power: Some(avg),
            max_power: Some(max),
            min_power: Some(0.0),
        }
    }

    #[test]
    fn gauge_ratio_is_zero_before_first_load() {
        assert_eq!(gauge_ratio(None), 0.0);
    }

    #[test]
    fn gauge_ratio_is_zero_for_zero_maximum() {
        assert_eq!(gauge_ratio(Some(&snapshot(5.5, 0.0))), 0.0);
    }

    #[test]
    fn gauge_ratio_equals_quotient_when_in_range() {
        assert_eq!(gauge_ratio(Some(&snapshot(5.5, 10.0))), 0.55);
    }

    #[test]
    fn gauge_ratio_is_clamped() {
        assert_eq!(gauge_ratio(Some(&snapshot(20.0, 10.0))), 1.0);
        assert_eq!(gauge_ratio(Some(&snapshot(-3.0, 10.0))), 0.0);
    }

    #[test]
    fn gauge_ratio_defaults_missing_fields() {
        let no_avg = StatsSnapshot {
            max_power: Some(10.0),
            ..Default::default()
        };
        assert_eq!(gauge_ratio(Some(&no_avg)), 0.0);

        let no_max = StatsSnapshot {
            avg_power: Some(0.25),
            ..Default::default()
        };
        assert_eq!(gauge_ratio(Some(&no_max)), 0.25);
    }

    #[test]
    fn snapshot_decodes_with_missing_fields() {
        let parsed: StatsSnapshot =
            serde_json::from_str(r#"{"count": 12, "avg_power": 5.5}"#).expect("decode");
        assert_eq!(parsed.count, Some(12));
        assert_eq!(parsed.avg_power, Some(5.5));
        assert_eq!(parsed.max_power, None);
        assert_eq!(parsed.min_power, None);
    }
}
