//! StatsState - Aggregate Readings Snapshot State

use crate::domain::snapshot::{gauge_ratio, StatsSnapshot};
use crate::utils::format::{format_count, format_power_mw};

/// View state for the aggregate readings snapshot.
///
/// The snapshot is absent until the one-shot load resolves and is replaced
/// wholesale when it does. The rest of the UI reads it through the display
/// helpers and never mutates it.
#[derive(Debug, Clone, Default)]
pub struct StatsState {
    snapshot: Option<StatsSnapshot>,
}

impl StatsState {
    /// Replace the snapshot with a freshly loaded one
    pub fn set_snapshot(&mut self, snapshot: StatsSnapshot) {
        self.snapshot = Some(snapshot);
    }

    /// The current snapshot, if one has loaded
    pub fn snapshot(&self) -> Option<&StatsSnapshot> {
        self.snapshot.as_ref()
    }

    /// Whether the one-shot load has resolved
    pub fn is_loaded(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Gauge ratio in [0, 1] derived from the snapshot
    pub fn gauge_ratio(&self) -> f64 {
        gauge_ratio(self.snapshot.as_ref())
    }

    /// Total readings, or the placeholder
    pub fn display_count(&self) -> String {
        format_count(self.snapshot.as_ref().and_then(|s| s.count))
    }

    /// Average power in mW, or the placeholder
    pub fn display_avg_power(&self) -> String {
        format_power_mw(self.snapshot.as_ref().and_then(|s| s.avg_power))
    }

    /// Maximum power in mW, or the placeholder
    pub fn display_max_power(&self) -> String {
        format_power_mw(self.snapshot.as_ref().and_then(|s| s.max_power))
    }

    /// Minimum power in mW, or the placeholder
    pub fn display_min_power(&self) -> String {
        format_power_mw(self.snapshot.as_ref().and_then(|s| s.min_power))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_placeholders_before_load() {
        let state = StatsState::default();
        assert!(!state.is_loaded());
        assert_eq!(state.display_count(), "--");
        assert_eq!(state.display_avg_power(), "--");
        assert_eq!(state.display_max_power(), "--");
        assert_eq!(state.display_min_power(), "--");
        assert_eq!(state.gauge_ratio(), 0.0);
    }

    #[test]
    fn displays_loaded_snapshot() {
        let mut state = StatsState::default();
        state.set_snapshot(StatsSnapshot {
            count: Some(12),
            avg_power: Some(5.5),
            max_power: Some(10.0),
            min_power: Some(1.0),
        });
        assert_eq!(state.display_count(), "12");
        assert_eq!(state.display_avg_power(), "5.50");
        assert_eq!(state.display_max_power(), "10.00");
        assert_eq!(state.display_min_power(), "1.00");
        assert_eq!(state.gauge_ratio(), 0.55);
    }

    #[test]
    fn partial_snapshot_keeps_placeholders_for_missing_fields() {
        let mut state = StatsState::default();
        state.set_snapshot(StatsSnapshot {
            count: Some(3),
            ..Default::default()
        });
        assert_eq!(state.display_count(), "3");
        assert_eq!(state.display_avg_power(), "--");
    }

    #[test]
    fn snapshot_is_replaced_wholesale() {
        let mut state = StatsState::default();
        state.set_snapshot(StatsSnapshot {
            count: Some(3),
            avg_power: Some(2.0),
            ..Default::default()
        });
        state.set_snapshot(StatsSnapshot {
            max_power: Some(9.0),
            ..Default::default()
        });
        assert_eq!(state.display_count(), "--");
        assert_eq!(state.display_max_power(), "9.00");
    }
}
