//! BackendApi - HTTP Client for the Stats/Prediction Backend

use snafu::{ResultExt, Snafu};

use crate::domain::prediction::{PredictRequest, PredictResponse};
use crate::domain::snapshot::StatsSnapshot;

/// Failures of a single round trip
#[derive(Debug, Snafu)]
pub enum ApiError {
    /// The request never produced a response
    #[snafu(display("Request to {endpoint} failed: {source}"))]
    Transport {
        endpoint: &'static str,
        source: reqwest::Error,
    },

    /// The response body did not decode as the expected JSON
    #[snafu(display("Response from {endpoint} was not valid JSON: {source}"))]
    MalformedResponse {
        endpoint: &'static str,
        source: reqwest::Error,
    },
}

/// Client for the two backend endpoints
#[derive(Debug, Clone)]
pub struct BackendApi {
    client: reqwest::Client,
    base_url: String,
}

impl BackendApi {
    /// Create a client for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// The backend base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the aggregate readings snapshot.
    ///
    /// The status code is not checked; any body that decodes as a snapshot
    /// counts as a successful load.
    pub async fn fetch_stats(&self) -> Result<StatsSnapshot, ApiError> {
        let response = self
            .client
            .get(format!("{}/stats", self.base_url))
            .send()
            .await
            .context(TransportSnafu { endpoint: "/stats" })?;

        response
            .json::<StatsSnapshot>()
            .await
            .context(MalformedResponseSnafu { endpoint: "/stats" })
    }

    /// Run one predict round trip with the given request body
    pub async fn predict(&self, request: &PredictRequest) -> Result<PredictResponse, ApiError> {
        let response = self
            .client
            .post(format!("{}/predict", self.base_url))
            .json(request)
            .send()
            .await
            .context(TransportSnafu {
                endpoint: "/predict",
            })?;

        response
            .json::<PredictResponse>()
            .await
            .context(MalformedResponseSnafu {
                endpoint: "/predict",
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::prediction::{PredictionForm, StepLocation};
    use std::future::Future;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;

    fn block_on<F: Future>(future: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .expect("build test runtime")
            .block_on(future)
    }

    /// Serve one canned HTTP response on a loopback socket, reporting the
    /// raw request text through the returned channel.
    fn serve_once(body: &str) -> (String, mpsc::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        let (request_tx, request_rx) = mpsc::channel();
        thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut seen = Vec::new();
                let mut buf = [0u8; 4096];
                loop {
                    match stream.read(&mut buf) {
                        Ok(0) => break,
                        Ok(n) => {
                            seen.extend_from_slice(&buf[..n]);
                            if request_complete(&seen) {
                                break;
                            }
                        }
                        Err(_) => break,
                    }
                }
                let _ = request_tx.send(String::from_utf8_lossy(&seen).into_owned());
                let _ = stream.write_all(response.as_bytes());
            }
        });
        (format!("http://{}", addr), request_rx)
    }

    /// Whether `bytes` holds complete headers plus the announced body.
    fn request_complete(bytes: &[u8]) -> bool {
        let Some(header_end) = bytes.windows(4).position(|w| w == b"\r\n\r\n") else {
            return false;
        };
        let headers = String::from_utf8_lossy(&bytes[..header_end]);
        let content_length = headers
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        bytes.len() >= header_end + 4 + content_length
    }

    #[test]
    fn fetch_stats_decodes_snapshot() {
        let (url, _rx) = serve_once(r#"{"count":12,"avg_power":5.5,"max_power":10,"min_power":1}"#);
        let api = BackendApi::new(url);
        let snapshot = block_on(api.fetch_stats()).expect("fetch stats");
        assert_eq!(snapshot.count, Some(12));
        assert_eq!(snapshot.avg_power, Some(5.5));
        assert_eq!(snapshot.max_power, Some(10.0));
        assert_eq!(snapshot.min_power, Some(1.0));
    }

    #[test]
    fn fetch_stats_reports_transport_failure() {
        // Grab a free port, then close the listener so the connect is refused.
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);

        let api = BackendApi::new(format!("http://{}", addr));
        let err = block_on(api.fetch_stats()).expect_err("should fail");
        assert!(matches!(err, ApiError::Transport { .. }));
    }

    #[test]
    fn fetch_stats_reports_non_json_body() {
        let (url, _rx) = serve_once("<html>maintenance</html>");
        let api = BackendApi::new(url);
        let err = block_on(api.fetch_stats()).expect_err("should fail");
        assert!(matches!(err, ApiError::MalformedResponse { .. }));
    }

    #[test]
    fn predict_posts_parsed_form_and_decodes_value() {
        let (url, request_rx) = serve_once(r#"{"predicted_power_mW": 3.14159}"#);
        let api = BackendApi::new(url);

        let form = PredictionForm {
            voltage: "3.3".to_string(),
            current_ua: "120".to_string(),
            weight_kg: "72.5".to_string(),
            step_location: StepLocation::Edge,
        };
        let response = block_on(api.predict(&form.to_request())).expect("predict");
        assert_eq!(response.predicted_power_mw, Some(3.14159));

        let request = request_rx
            .recv_timeout(std::time::Duration::from_secs(2))
            .expect("captured request");
        assert!(request.starts_with("POST /predict"));
        assert!(request.contains("\"voltage\":3.3"));
        assert!(request.contains("\"current_uA\":120.0"));
        assert!(request.contains("\"weight_kg\":72.5"));
        assert!(request.contains("\"step_location\":\"Edge\""));
    }

    #[test]
    fn predict_sends_null_for_unparseable_fields() {
        let (url, request_rx) = serve_once("{}");
        let api = BackendApi::new(url);

        let form = PredictionForm {
            voltage: "not a number".to_string(),
            ..Default::default()
        };
        let response = block_on(api.predict(&form.to_request())).expect("predict");
        assert_eq!(response.predicted_power_mw, None);

        let request = request_rx
            .recv_timeout(std::time::Duration::from_secs(2))
            .expect("captured request");
        assert!(request.contains("\"voltage\":null"));
    }
}
