//! AppEvent - Application Event Enum
//!
//! All events that can be sent from the service layer to the UI layer.

use chrono::{DateTime, Local};

use crate::domain::prediction::PredictResponse;
use crate::domain::snapshot::StatsSnapshot;
use crate::state::log_state::LogLevel;

/// Application events for service -> UI communication
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Log message for the diagnostic panel
    Log {
        level: LogLevel,
        message: String,
        timestamp: DateTime<Local>,
    },

    /// The one-shot stats load resolved with a snapshot
    StatsLoaded { snapshot: StatsSnapshot },

    /// A predict round trip resolved.
    ///
    /// Emitted in arrival order; the response may or may not carry a
    /// usable value, the prediction state decides.
    PredictionReady { response: PredictResponse },
}

impl AppEvent {
    /// Create a log event with current timestamp
    pub fn log(level: LogLevel, message: impl Into<String>) -> Self {
        Self::Log {
            level,
            message: message.into(),
            timestamp: Local::now(),
        }
    }

    /// Create an info log event
    pub fn info(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Info, message)
    }

    /// Create a warning log event
    pub fn warn(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Warn, message)
    }

    /// Create an error log event
    pub fn error(message: impl Into<String>) -> Self {
        Self::log(LogLevel::Error, message)
    }
}
