//! Dashboard Controller
//!
//! Bridges dashboard actions to the service layer.

use gpui::App;

use crate::domain::prediction::PredictionForm;
use crate::eventing::app_event::AppEvent;
use crate::services::service_hub::ServiceHub;

/// Dashboard page controller
pub struct DashboardController;

impl DashboardController {
    /// Create a new controller
    pub fn new() -> Self {
        Self
    }

    /// Submit one predict round trip for the current form.
    ///
    /// The form is parsed here, at submission time; whatever the parse
    /// yields is sent. Submissions are not serialized against each other.
    pub fn submit_prediction(&self, form: &PredictionForm, cx: &mut App) {
        if let Some(hub) = cx.try_global::<ServiceHub>() {
            hub.log(AppEvent::info(format!(
                "Requesting prediction ({} step)",
                form.step_location.label()
            )));
            hub.predict(form.to_request());
        }
    }
}

impl Default for DashboardController {
    fn default() -> Self {
        Self::new()
    }
}
