//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! State is split by update frequency: the one-shot stats snapshot, the
//! per-keystroke prediction form, and the per-event log buffer never force
//! each other to re-render.

use gpui::{App, AppContext, Entity, Global};

use crate::state::{
    i18n_state::I18nState, log_state::LogState, prediction_state::PredictionState,
    stats_state::StatsState,
};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Aggregate readings snapshot state
    pub stats: Entity<StatsState>,
    /// Prediction form and result state
    pub prediction: Entity<PredictionState>,
    /// Log messages (ring buffer)
    pub logs: Entity<LogState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities with default values
    pub fn init(cx: &mut App) -> Self {
        Self {
            stats: cx.new(|_| StatsState::default()),
            prediction: cx.new(|_| PredictionState::default()),
            logs: cx.new(|_| LogState::default()),
            i18n: cx.new(|_| I18nState::default()),
        }
    }
}
