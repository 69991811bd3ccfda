//! Config - Application Configuration

use serde::{Deserialize, Serialize};

/// Default backend base URL
pub const DEFAULT_API_BASE: &str = "https://peizo-backend.onrender.com";

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the stats/prediction backend
    pub api_base: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}
