//! StatCard Component
//!
//! A single aggregate statistic: small label on top, large value below.

use gpui::{
    div, prelude::*, px, App, IntoElement, ParentElement, RenderOnce, SharedString, Styled,
    Window,
};

use crate::theme::colors::PiezoColors;

/// A card displaying one aggregate statistic
#[derive(IntoElement)]
pub struct StatCard {
    label: SharedString,
    value: SharedString,
    icon: SharedString,
}

impl StatCard {
    pub fn new(
        label: impl Into<SharedString>,
        value: impl Into<SharedString>,
        icon: impl Into<SharedString>,
    ) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            icon: icon.into(),
        }
    }
}

impl RenderOnce for StatCard {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        div()
            .flex_1()
            .p_4()
            .rounded_lg()
            .bg(PiezoColors::card_bg())
            .border_1()
            .border_color(PiezoColors::border())
            .flex()
            .flex_col()
            .gap_1()
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .justify_between()
                    .text_size(px(13.0))
                    .text_color(PiezoColors::text_secondary())
                    .child(self.label)
                    .child(self.icon),
            )
            .child(
                div()
                    .text_size(px(28.0))
                    .font_weight(gpui::FontWeight::BOLD)
                    .text_color(PiezoColors::text_primary())
                    .child(self.value),
            )
    }
}
