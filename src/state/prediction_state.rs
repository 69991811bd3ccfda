//! PredictionState - Form Fields and Prediction Result

use crate::domain::prediction::{PredictResponse, PredictionForm, StepLocation};
use crate::utils::format::format_prediction_mw;

/// View state for the prediction panel.
///
/// The form holds raw field text while the user edits; the result holds the
/// last accepted prediction. A response without `predicted_power_mW` leaves
/// the result untouched, so a stale value keeps showing until the next
/// accepted response.
#[derive(Debug, Clone, Default)]
pub struct PredictionState {
    form: PredictionForm,
    result_mw: Option<f64>,
}

impl PredictionState {
    /// The form as currently edited
    pub fn form(&self) -> &PredictionForm {
        &self.form
    }

    /// Replace the voltage text, leaving every other field untouched
    pub fn set_voltage(&mut self, value: impl Into<String>) {
        self.form.voltage = value.into();
    }

    /// Replace the current text, leaving every other field untouched
    pub fn set_current_ua(&mut self, value: impl Into<String>) {
        self.form.current_ua = value.into();
    }

    /// Replace the weight text, leaving every other field untouched
    pub fn set_weight_kg(&mut self, value: impl Into<String>) {
        self.form.weight_kg = value.into();
    }

    /// Replace the step location, leaving every other field untouched
    pub fn set_step_location(&mut self, location: StepLocation) {
        self.form.step_location = location;
    }

    /// Apply a predict response in arrival order.
    ///
    /// Responses race: with overlapping submissions the last response to
    /// arrive wins, whichever was issued first. A response without the
    /// expected field changes nothing.
    pub fn apply_response(&mut self, response: &PredictResponse) {
        if let Some(value) = response.predicted_power_mw {
            self.result_mw = Some(round_to_milliwatt_thousandth(value));
        }
    }

    /// The accepted prediction, rounded to three decimal places
    pub fn result_mw(&self) -> Option<f64> {
        self.result_mw
    }

    /// The prediction formatted for display, e.g. "3.142"
    pub fn display_result(&self) -> Option<String> {
        self.result_mw.map(format_prediction_mw)
    }
}

fn round_to_milliwatt_thousandth(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(value: f64) -> PredictResponse {
        PredictResponse {
            predicted_power_mw: Some(value),
        }
    }

    #[test]
    fn field_setters_are_shallow() {
        let mut state = PredictionState::default();
        state.set_voltage("3.3");
        state.set_current_ua("120");
        state.set_step_location(StepLocation::Corner);

        state.set_weight_kg("72.5");

        let form = state.form();
        assert_eq!(form.voltage, "3.3");
        assert_eq!(form.current_ua, "120");
        assert_eq!(form.weight_kg, "72.5");
        assert_eq!(form.step_location, StepLocation::Corner);
    }

    #[test]
    fn accepted_response_is_rounded_for_display() {
        let mut state = PredictionState::default();
        state.apply_response(&response(3.14159));
        assert_eq!(state.display_result().as_deref(), Some("3.142"));
    }

    #[test]
    fn empty_response_leaves_result_unchanged() {
        let mut state = PredictionState::default();
        state.apply_response(&PredictResponse::default());
        assert_eq!(state.result_mw(), None);

        state.apply_response(&response(2.5));
        state.apply_response(&PredictResponse::default());
        assert_eq!(state.display_result().as_deref(), Some("2.500"));
    }

    #[test]
    fn later_arriving_response_wins() {
        // Two submissions overlap; the second issued answer arrives first.
        let mut state = PredictionState::default();
        state.apply_response(&response(9.0));
        state.apply_response(&response(4.0));
        assert_eq!(state.display_result().as_deref(), Some("4.000"));
    }
}
