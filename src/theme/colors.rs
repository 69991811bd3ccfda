//! Colors - Piezo Theme Colors
//!
//! Emerald-on-dark palette matching the product's visual identity.

use gpui::{rgb, rgba, Rgba};

/// Piezo color palette - All colors are accessed via associated functions
pub struct PiezoColors;

impl PiezoColors {
    // Primary colors
    /// Primary accent - Emerald (gauge fill, highlights)
    pub fn accent() -> Rgba { rgb(0x22c55e) }
    /// Bright accent - used on hover
    pub fn accent_bright() -> Rgba { rgb(0x4ade80) }

    // Background colors
    /// Main background - near-black navy
    pub fn background() -> Rgba { rgb(0x020617) }
    /// Header background - deep emerald
    pub fn header_bg() -> Rgba { rgb(0x022c22) }
    /// Card background - dark slate
    pub fn card_bg() -> Rgba { rgb(0x0f172a) }
    /// Overview card background - deep green
    pub fn overview_bg() -> Rgba { rgb(0x052e16) }
    /// Log panel background - dark blue
    pub fn log_panel_bg() -> Rgba { rgb(0x1a2332) }

    // Text colors
    /// Primary text - pale mint
    pub fn text_primary() -> Rgba { rgb(0xe5ffe9) }
    /// Secondary text - soft emerald
    pub fn text_secondary() -> Rgba { rgb(0xa7f3d0) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Header text
    pub fn text_header() -> Rgba { rgb(0xffffff) }

    // Status colors
    /// Success - Green
    pub fn success() -> Rgba { rgb(0x22c55e) }
    /// Error/Danger - Red
    pub fn danger() -> Rgba { rgb(0xef4444) }

    // Border colors
    /// Card/input border - translucent emerald
    pub fn border() -> Rgba { rgba(0x34d39980) }
    /// Focused border - solid emerald
    pub fn border_focus() -> Rgba { rgb(0x34d399) }

    // Gauge colors
    /// Gauge track (unfilled)
    pub fn gauge_track() -> Rgba { rgb(0x0f172a) }
    /// Gauge fill
    pub fn gauge_fill() -> Rgba { rgb(0x22c55e) }

    // Button colors
    /// Primary button background
    pub fn button_primary_bg() -> Rgba { rgb(0x22c55e) }
    /// Primary button text
    pub fn button_primary_text() -> Rgba { rgb(0x022c22) }
    /// Ghost button text
    pub fn button_ghost_text() -> Rgba { rgb(0xa7f3d0) }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba { rgb(0x020617) }
    /// Input border
    pub fn input_border() -> Rgba { rgba(0x34d399e5) }
    /// Input placeholder
    pub fn input_placeholder() -> Rgba { rgb(0x9ca3af) }
}
