//! Workspace - Main Shell with Layout and Event Pump
//!
//! The workspace is the main container that holds the header, the dashboard,
//! and the log panel. It also manages the event pump that bridges service
//! events to UI updates.

use gpui::{
    div, prelude::*, App, Context, Entity, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::components::layout::header::Header;
use crate::components::layout::log_panel::LogPanel;
use crate::eventing::app_event::AppEvent;
use crate::features::dashboard::page::DashboardPage;
use crate::theme::colors::PiezoColors;

/// Main workspace containing the application layout
pub struct Workspace {
    header: Entity<Header>,
    dashboard: Entity<DashboardPage>,
    log_panel: Entity<LogPanel>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        event_rx: flume::Receiver<AppEvent>,
        cx: &mut Context<Self>,
    ) -> Self {
        // Create layout components
        let header = cx.new(|cx| Header::new(entities.clone(), cx));
        let dashboard = cx.new(|cx| DashboardPage::new(entities.clone(), cx));
        let log_panel = cx.new(|cx| LogPanel::new(entities.clone(), cx));

        // Start event pump
        Self::start_event_pump(event_rx, entities, cx);

        Self {
            header,
            dashboard,
            log_panel,
        }
    }

    /// Start the event pump that dispatches service events to UI.
    ///
    /// Events are applied strictly in arrival order on the UI thread, which
    /// is what makes "last response wins" the observable behavior for
    /// overlapping round trips.
    fn start_event_pump(
        event_rx: flume::Receiver<AppEvent>,
        entities: AppEntities,
        cx: &mut Context<Self>,
    ) {
        cx.spawn(async move |_this, cx| {
            while let Ok(event) = event_rx.recv_async().await {
                let entities = entities.clone();
                let _ = cx.update(|cx: &mut App| {
                    dispatch_event(event, &entities, cx);
                });
            }
        })
        .detach();
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(PiezoColors::background())
            .child(
                // Header
                self.header.clone(),
            )
            .child(
                // Dashboard content
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .child(self.dashboard.clone()),
            )
            .child(
                // Log panel
                self.log_panel.clone(),
            )
    }
}

/// Dispatch an AppEvent to the entity that owns the matching state
fn dispatch_event(event: AppEvent, entities: &AppEntities, cx: &mut App) {
    match event {
        AppEvent::Log {
            level,
            message,
            timestamp,
        } => {
            entities.logs.update(cx, |logs, cx| {
                logs.push(level, message, timestamp);
                cx.notify();
            });
        }
        AppEvent::StatsLoaded { snapshot } => {
            entities.stats.update(cx, |stats, cx| {
                stats.set_snapshot(snapshot);
                cx.notify();
            });
        }
        AppEvent::PredictionReady { response } => {
            entities.prediction.update(cx, |prediction, cx| {
                prediction.apply_response(&response);
                cx.notify();
            });
        }
    }
}
