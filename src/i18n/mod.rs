//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Chinese (Simplified)
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("Piezo Energy Dashboard", "压电能源仪表盘"));

    // Overview
    map.insert("overview-title", ("Piezo Energy Monitor", "压电能源监测"));
    map.insert(
        "overview-subtitle",
        (
            "Average output relative to the observed maximum",
            "平均输出相对于观测最大值",
        ),
    );

    // Stat cards
    map.insert("stat-count", ("Total Readings", "读数总数"));
    map.insert("stat-avg", ("Average Power (mW)", "平均功率 (mW)"));
    map.insert("stat-max", ("Max Power (mW)", "最大功率 (mW)"));
    map.insert("stat-min", ("Min Power (mW)", "最小功率 (mW)"));

    // Graph card
    map.insert("graph-title", ("Energy Output vs People", "能量输出与人数"));
    map.insert(
        "graph-desc",
        (
            "Graph showing how energy output varies as more people step on the tiles.",
            "展示随着更多人踩踏地砖，能量输出如何变化。",
        ),
    );

    // Prediction panel
    map.insert("predict-title", ("Predict Power Output", "预测功率输出"));
    map.insert("predict-voltage", ("Voltage (V)", "电压 (V)"));
    map.insert("predict-current", ("Current (µA)", "电流 (µA)"));
    map.insert("predict-weight", ("Weight (kg)", "体重 (kg)"));
    map.insert("predict-location", ("Step Location", "踩踏位置"));
    map.insert("predict-submit", ("Predict", "预测"));
    map.insert("predict-result", ("Predicted Power", "预测功率"));
    map.insert("loc-center", ("Center", "中心"));
    map.insert("loc-edge", ("Edge", "边缘"));
    map.insert("loc-corner", ("Corner", "角落"));

    // Log panel
    map.insert("log-title", ("Logs", "日志"));
    map.insert("log-clear", ("Clear", "清除"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::ZhCN => SharedString::from(zh),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}
