//! ServiceHub - Background Round-Trip Execution
//!
//! Owns the thread that talks to the backend. UI code sends commands;
//! outcomes come back as `AppEvent`s in arrival order.

use std::sync::Arc;

use gpui::Global;

use crate::domain::config::AppConfig;
use crate::domain::prediction::PredictRequest;
use crate::eventing::app_event::AppEvent;
use crate::services::backend_api::BackendApi;

/// Commands that can be sent to the service layer
#[derive(Debug, Clone)]
pub enum ServiceCommand {
    /// Fetch the one-shot stats snapshot
    LoadStats,
    /// Run one predict round trip
    Predict(PredictRequest),
}

/// ServiceHub executes backend round trips off the UI thread
pub struct ServiceHub {
    /// Channel to send events to UI
    event_tx: flume::Sender<AppEvent>,
    /// Channel to send commands to the worker
    command_tx: flume::Sender<ServiceCommand>,
}

impl Global for ServiceHub {}

impl ServiceHub {
    /// Create a new service hub talking to the configured backend
    pub fn new(config: AppConfig, event_tx: flume::Sender<AppEvent>) -> Self {
        let (command_tx, command_rx) = flume::unbounded::<ServiceCommand>();

        let hub = Self {
            event_tx: event_tx.clone(),
            command_tx,
        };

        Self::start_command_handler(config, command_rx, event_tx);

        hub
    }

    /// Start the command handler thread.
    ///
    /// Every command runs in its own task, so the stats load and any number
    /// of predict submissions can be in flight at once. There is no request
    /// sequencing: overlapping submissions race and the later-arriving
    /// response wins.
    fn start_command_handler(
        config: AppConfig,
        command_rx: flume::Receiver<ServiceCommand>,
        event_tx: flume::Sender<AppEvent>,
    ) {
        std::thread::spawn(move || {
            let rt = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
                Ok(rt) => rt,
                Err(e) => {
                    tracing::error!("Failed to build network runtime: {e}");
                    let _ = event_tx.send(AppEvent::error(format!(
                        "Failed to start network runtime: {e}"
                    )));
                    return;
                }
            };

            let api = Arc::new(BackendApi::new(config.api_base));
            let _ = event_tx.send(AppEvent::info(format!("Backend: {}", api.base_url())));

            rt.block_on(async move {
                while let Ok(cmd) = command_rx.recv_async().await {
                    tokio::spawn(handle_command(cmd, api.clone(), event_tx.clone()));
                }
            });
        });
    }

    /// Send a command to the worker
    pub fn send(&self, cmd: ServiceCommand) {
        let _ = self.command_tx.send(cmd);
    }

    /// Request the one-shot stats snapshot
    pub fn load_stats(&self) {
        self.send(ServiceCommand::LoadStats);
    }

    /// Submit one predict round trip
    pub fn predict(&self, request: PredictRequest) {
        self.send(ServiceCommand::Predict(request));
    }

    /// Send a log event to the diagnostic panel
    pub fn log(&self, event: AppEvent) {
        let _ = self.event_tx.send(event);
    }
}

/// Run one command to completion and report the outcome.
///
/// Failures are logged and otherwise dropped: displayed state changes only
/// on a usable response, so the UI keeps showing whatever it had.
async fn handle_command(
    cmd: ServiceCommand,
    api: Arc<BackendApi>,
    event_tx: flume::Sender<AppEvent>,
) {
    match cmd {
        ServiceCommand::LoadStats => match api.fetch_stats().await {
            Ok(snapshot) => {
                let count = snapshot
                    .count
                    .map_or_else(|| "?".to_string(), |c| c.to_string());
                let _ = event_tx.send(AppEvent::info(format!(
                    "Stats snapshot loaded ({count} readings)"
                )));
                let _ = event_tx.send(AppEvent::StatsLoaded { snapshot });
            }
            Err(e) => {
                tracing::warn!("Stats load failed: {e}");
                let _ = event_tx.send(AppEvent::error(format!("Error loading stats: {e}")));
            }
        },
        ServiceCommand::Predict(request) => match api.predict(&request).await {
            Ok(response) => {
                if response.predicted_power_mw.is_none() {
                    let _ = event_tx.send(AppEvent::warn(
                        "Predict response carried no predicted_power_mW",
                    ));
                }
                let _ = event_tx.send(AppEvent::PredictionReady { response });
            }
            Err(e) => {
                tracing::warn!("Prediction failed: {e}");
                let _ = event_tx.send(AppEvent::error(format!("Prediction error: {e}")));
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;
    use std::time::Duration;

    fn serve_once(body: &str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(response.as_bytes());
            }
        });
        format!("http://{}", addr)
    }

    fn recv_until<F: Fn(&AppEvent) -> bool>(
        rx: &flume::Receiver<AppEvent>,
        matches: F,
    ) -> AppEvent {
        loop {
            let event = rx
                .recv_timeout(Duration::from_secs(5))
                .expect("event before timeout");
            if matches(&event) {
                return event;
            }
        }
    }

    #[test]
    fn load_stats_emits_snapshot_event() {
        let url = serve_once(r#"{"count":12,"avg_power":5.5,"max_power":10,"min_power":1}"#);
        let (event_tx, event_rx) = flume::unbounded();
        let hub = ServiceHub::new(AppConfig { api_base: url }, event_tx);

        hub.load_stats();

        let event = recv_until(&event_rx, |e| matches!(e, AppEvent::StatsLoaded { .. }));
        let AppEvent::StatsLoaded { snapshot } = event else {
            panic!("expected StatsLoaded");
        };
        assert_eq!(snapshot.count, Some(12));
        assert_eq!(snapshot.avg_power, Some(5.5));
    }

    #[test]
    fn failed_load_emits_only_a_log_event() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let (event_tx, event_rx) = flume::unbounded();
        let hub = ServiceHub::new(
            AppConfig {
                api_base: format!("http://{}", addr),
            },
            event_tx,
        );

        hub.load_stats();

        let event = recv_until(&event_rx, |e| {
            matches!(
                e,
                AppEvent::Log {
                    level: crate::state::log_state::LogLevel::Error,
                    ..
                }
            )
        });
        let AppEvent::Log { message, .. } = event else {
            panic!("expected Log");
        };
        assert!(message.contains("Error loading stats"));
        // No snapshot event follows a failed load.
        assert!(event_rx.recv_timeout(Duration::from_millis(300)).is_err());
    }

    #[test]
    fn predict_emits_response_event() {
        let url = serve_once(r#"{"predicted_power_mW": 2.5}"#);
        let (event_tx, event_rx) = flume::unbounded();
        let hub = ServiceHub::new(AppConfig { api_base: url }, event_tx);

        hub.predict(crate::domain::prediction::PredictionForm::default().to_request());

        let event = recv_until(&event_rx, |e| matches!(e, AppEvent::PredictionReady { .. }));
        let AppEvent::PredictionReady { response } = event else {
            panic!("expected PredictionReady");
        };
        assert_eq!(response.predicted_power_mw, Some(2.5));
    }
}
