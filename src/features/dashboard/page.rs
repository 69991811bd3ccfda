//! Dashboard Page
//!
//! Overview gauge, aggregate stat cards, the presentational output graph,
//! and the prediction form.

use std::path::PathBuf;

use gpui::{
    div, img, prelude::*, px, relative, AnyElement, ClickEvent, Context, Entity,
    InteractiveElement, IntoElement, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::composite::stat_card::StatCard;
use crate::components::primitives::button::Button;
use crate::components::primitives::select::{Select, SelectOption};
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::domain::prediction::StepLocation;
use crate::features::dashboard::controller::DashboardController;
use crate::i18n::{t, Locale};
use crate::theme::colors::PiezoColors;
use crate::utils::format::format_percent;

/// Dashboard page component
pub struct DashboardPage {
    entities: AppEntities,
    controller: DashboardController,
    voltage_input: Entity<TextInput>,
    current_input: Entity<TextInput>,
    weight_input: Entity<TextInput>,
}

impl DashboardPage {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let controller = DashboardController::new();

        // Observe the states this page renders
        cx.observe(&entities.stats, |_this, _, cx| cx.notify()).detach();
        cx.observe(&entities.prediction, |_this, _, cx| cx.notify())
            .detach();
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify()).detach();

        // Each input mirrors its text into the prediction form, one field
        // at a time.
        let voltage_input = text_input("voltage-input", "", "0.00", cx);
        {
            let entities = entities.clone();
            voltage_input.update(cx, |input, _| {
                input.on_change(move |text, cx| {
                    let text = text.to_string();
                    entities.prediction.update(cx, |prediction, cx| {
                        prediction.set_voltage(text);
                        cx.notify();
                    });
                });
            });
        }

        let current_input = text_input("current-input", "", "0.00", cx);
        {
            let entities = entities.clone();
            current_input.update(cx, |input, _| {
                input.on_change(move |text, cx| {
                    let text = text.to_string();
                    entities.prediction.update(cx, |prediction, cx| {
                        prediction.set_current_ua(text);
                        cx.notify();
                    });
                });
            });
        }

        let weight_input = text_input("weight-input", "", "0.00", cx);
        {
            let entities = entities.clone();
            weight_input.update(cx, |input, _| {
                input.on_change(move |text, cx| {
                    let text = text.to_string();
                    entities.prediction.update(cx, |prediction, cx| {
                        prediction.set_weight_kg(text);
                        cx.notify();
                    });
                });
            });
        }

        Self {
            entities,
            controller,
            voltage_input,
            current_input,
            weight_input,
        }
    }

    fn render_overview(&self, locale: Locale, cx: &Context<Self>) -> AnyElement {
        let ratio = self.entities.stats.read(cx).gauge_ratio();

        div()
            .w_full()
            .p_5()
            .rounded_xl()
            .bg(PiezoColors::overview_bg())
            .border_1()
            .border_color(PiezoColors::border())
            .flex()
            .flex_col()
            .gap_3()
            .child(
                div()
                    .text_size(px(18.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(PiezoColors::text_primary())
                    .child(t(locale, "overview-title")),
            )
            .child(
                div()
                    .text_size(px(12.0))
                    .text_color(PiezoColors::text_secondary())
                    .child(t(locale, "overview-subtitle")),
            )
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .gap_3()
                    // Gauge track with proportional fill
                    .child(
                        div()
                            .flex_1()
                            .h(px(14.0))
                            .rounded_full()
                            .bg(PiezoColors::gauge_track())
                            .overflow_hidden()
                            .child(
                                div()
                                    .h_full()
                                    .w(relative(ratio as f32))
                                    .rounded_full()
                                    .bg(PiezoColors::gauge_fill()),
                            ),
                    )
                    .child(
                        div()
                            .min_w(px(44.0))
                            .text_size(px(14.0))
                            .font_weight(gpui::FontWeight::BOLD)
                            .text_color(PiezoColors::text_primary())
                            .child(format_percent(ratio)),
                    ),
            )
            .into_any_element()
    }

    fn render_stat_cards(&self, locale: Locale, cx: &Context<Self>) -> AnyElement {
        let stats = self.entities.stats.read(cx);

        div()
            .w_full()
            .flex()
            .gap_4()
            .child(StatCard::new(
                t(locale, "stat-count"),
                stats.display_count(),
                "📊",
            ))
            .child(StatCard::new(
                t(locale, "stat-avg"),
                stats.display_avg_power(),
                "⚡",
            ))
            .child(StatCard::new(
                t(locale, "stat-max"),
                stats.display_max_power(),
                "🚀",
            ))
            .child(StatCard::new(
                t(locale, "stat-min"),
                stats.display_min_power(),
                "🔋",
            ))
            .into_any_element()
    }

    fn render_predict_panel(&self, locale: Locale, cx: &Context<Self>) -> AnyElement {
        let prediction = self.entities.prediction.read(cx);
        let step_location = prediction.form().step_location;
        let result = prediction.display_result();

        let location_options = StepLocation::all()
            .iter()
            .map(|location| {
                let key = match location {
                    StepLocation::Center => "loc-center",
                    StepLocation::Edge => "loc-edge",
                    StepLocation::Corner => "loc-corner",
                };
                SelectOption::new(location.label(), t(locale, key))
            })
            .collect();

        let entities = self.entities.clone();

        div()
            .w(px(360.0))
            .p_5()
            .rounded_xl()
            .bg(PiezoColors::card_bg())
            .border_1()
            .border_color(PiezoColors::border())
            .flex()
            .flex_col()
            .gap_3()
            .child(
                div()
                    .text_size(px(16.0))
                    .font_weight(gpui::FontWeight::SEMIBOLD)
                    .text_color(PiezoColors::text_primary())
                    .child(t(locale, "predict-title")),
            )
            .child(form_row(
                t(locale, "predict-voltage"),
                self.voltage_input.clone(),
            ))
            .child(form_row(
                t(locale, "predict-current"),
                self.current_input.clone(),
            ))
            .child(form_row(
                t(locale, "predict-weight"),
                self.weight_input.clone(),
            ))
            .child(
                div()
                    .w_full()
                    .flex()
                    .flex_col()
                    .gap_1()
                    .child(
                        div()
                            .text_size(px(12.0))
                            .text_color(PiezoColors::text_secondary())
                            .child(t(locale, "predict-location")),
                    )
                    .child(
                        Select::new("step-location")
                            .selected(step_location.label())
                            .options(location_options)
                            .on_click(move |_event: &ClickEvent, _window, cx| {
                                entities.prediction.update(cx, |prediction, cx| {
                                    let next = prediction.form().step_location.next();
                                    prediction.set_step_location(next);
                                    cx.notify();
                                });
                            }),
                    ),
            )
            .child(
                Button::primary("predict-btn", t(locale, "predict-submit")).on_click(cx.listener(
                    |this, _event: &ClickEvent, _window, cx| {
                        let form = this.entities.prediction.read(cx).form().clone();
                        this.controller.submit_prediction(&form, cx);
                    },
                )),
            )
            .when_some(result, |el, result| {
                el.child(
                    div()
                        .w_full()
                        .pt_2()
                        .flex()
                        .justify_center()
                        .text_size(px(16.0))
                        .font_weight(gpui::FontWeight::BOLD)
                        .text_color(PiezoColors::accent_bright())
                        .child(format!("{}: {} mW", t(locale, "predict-result"), result)),
                )
            })
            .into_any_element()
    }
}

/// A label stacked over its input
fn form_row(label: SharedString, input: Entity<TextInput>) -> impl IntoElement {
    div()
        .w_full()
        .flex()
        .flex_col()
        .gap_1()
        .child(
            div()
                .text_size(px(12.0))
                .text_color(PiezoColors::text_secondary())
                .child(label),
        )
        .child(input)
}

/// The presentational graph card; the image is supplied externally
fn render_graph_card(locale: Locale) -> AnyElement {
    div()
        .flex_1()
        .p_5()
        .rounded_xl()
        .bg(PiezoColors::card_bg())
        .border_1()
        .border_color(PiezoColors::border())
        .flex()
        .flex_col()
        .gap_2()
        .child(
            div()
                .text_size(px(16.0))
                .font_weight(gpui::FontWeight::SEMIBOLD)
                .text_color(PiezoColors::text_primary())
                .child(t(locale, "graph-title")),
        )
        .child(
            div()
                .text_size(px(12.0))
                .text_color(PiezoColors::text_muted())
                .child(t(locale, "graph-desc")),
        )
        .child(
            img(PathBuf::from("assets/energy-output-vs-people.png"))
                .w_full()
                .h(px(220.0))
                .rounded_md(),
        )
        .into_any_element()
}

impl Render for DashboardPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;

        let overview = self.render_overview(locale, cx);
        let stat_cards = self.render_stat_cards(locale, cx);
        let graph_card = render_graph_card(locale);
        let predict_panel = self.render_predict_panel(locale, cx);

        div()
            .id("dashboard-page")
            .size_full()
            .flex()
            .flex_col()
            .overflow_y_scroll()
            .p_4()
            .gap_4()
            .child(overview)
            .child(stat_cards)
            .child(
                div()
                    .w_full()
                    .flex()
                    .gap_4()
                    .items_start()
                    .child(graph_card)
                    .child(predict_panel),
            )
    }
}
