//! Prediction - Predict Request/Response and Form Fields

use serde::{Deserialize, Serialize};

/// Where on the tile the step landed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepLocation {
    #[default]
    Center,
    Edge,
    Corner,
}

impl StepLocation {
    /// Display label for the selector
    pub fn label(&self) -> &'static str {
        match self {
            StepLocation::Center => "Center",
            StepLocation::Edge => "Edge",
            StepLocation::Corner => "Corner",
        }
    }

    /// All selectable locations, in selector order
    pub fn all() -> &'static [StepLocation] {
        &[StepLocation::Center, StepLocation::Edge, StepLocation::Corner]
    }

    /// The next location in selector order, wrapping around
    pub fn next(&self) -> StepLocation {
        match self {
            StepLocation::Center => StepLocation::Edge,
            StepLocation::Edge => StepLocation::Corner,
            StepLocation::Corner => StepLocation::Center,
        }
    }
}

/// The prediction form as the user edits it.
///
/// Numeric fields hold raw text so partial entry ("3.", "-") survives
/// editing; parsing happens only at submission time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PredictionForm {
    pub voltage: String,
    pub current_ua: String,
    pub weight_kg: String,
    pub step_location: StepLocation,
}

impl PredictionForm {
    /// Parse the form into a wire request.
    ///
    /// Unparseable text becomes NaN rather than an error; the request is
    /// sent regardless and NaN serializes as `null` on the wire.
    pub fn to_request(&self) -> PredictRequest {
        PredictRequest {
            voltage: parse_number(&self.voltage),
            current_ua: parse_number(&self.current_ua),
            weight_kg: parse_number(&self.weight_kg),
            step_location: self.step_location,
        }
    }
}

fn parse_number(text: &str) -> f64 {
    text.trim().parse().unwrap_or(f64::NAN)
}

/// Body of `POST /predict`
#[derive(Debug, Clone, Serialize)]
pub struct PredictRequest {
    pub voltage: f64,
    #[serde(rename = "current_uA")]
    pub current_ua: f64,
    pub weight_kg: f64,
    pub step_location: StepLocation,
}

/// Response of `POST /predict`. Only `predicted_power_mW` is consumed;
/// anything else the backend sends is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PredictResponse {
    #[serde(rename = "predicted_power_mW", default)]
    pub predicted_power_mw: Option<f64>,
}
