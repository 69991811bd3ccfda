//! Format - Formatting Utilities

use chrono::{DateTime, Local};

/// Shown for stats the backend has not provided yet
pub const PLACEHOLDER: &str = "--";

/// Format a reading count for a stat card
pub fn format_count(value: Option<u64>) -> String {
    match value {
        Some(count) => count.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Format a power value in mW for a stat card (two decimals)
pub fn format_power_mw(value: Option<f64>) -> String {
    match value {
        Some(power) => format!("{power:.2}"),
        None => PLACEHOLDER.to_string(),
    }
}

/// Format an accepted prediction in mW (three decimals)
pub fn format_prediction_mw(value: f64) -> String {
    format!("{value:.3}")
}

/// Format a gauge ratio as a whole percentage, e.g. "55%"
pub fn format_percent(ratio: f64) -> String {
    format!("{:.0}%", ratio * 100.0)
}

/// Format time with milliseconds for the log panel
pub fn format_time_ms(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S%.3f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_renders_whole_or_placeholder() {
        assert_eq!(format_count(Some(12)), "12");
        assert_eq!(format_count(None), "--");
    }

    #[test]
    fn power_renders_two_decimals_or_placeholder() {
        assert_eq!(format_power_mw(Some(5.5)), "5.50");
        assert_eq!(format_power_mw(Some(10.0)), "10.00");
        assert_eq!(format_power_mw(None), "--");
    }

    #[test]
    fn prediction_renders_three_decimals() {
        assert_eq!(format_prediction_mw(3.142), "3.142");
        assert_eq!(format_prediction_mw(2.5), "2.500");
    }

    #[test]
    fn percent_renders_whole_number() {
        assert_eq!(format_percent(0.55), "55%");
        assert_eq!(format_percent(0.0), "0%");
        assert_eq!(format_percent(1.0), "100%");
    }
}
