use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use yansi::Paint;

use super::error::ApiError;
use crate::utils::absolute_url;

static SILENT: AtomicBool = AtomicBool::new(false);

pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

fn log_output(msg: String) {
    if !SILENT.load(Ordering::Relaxed) {
        println!("{}", msg);
    }
}

/// A single-shot HTTP request capability.
///
/// One call issues exactly one request and settles exactly once: either
/// with the parsed JSON response body, or with an [`ApiError`] carrying
/// the status code the caller will surface unchanged. Implementations
/// are injected into [`super::PermissionsClient`] by the caller, which
/// is what lets the test suite substitute a recording fake.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue one request and return the parsed JSON response body.
    async fn execute(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError>;
}

/// Reqwest-backed transport bound to a base URL.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(format!("permctl/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");
        Self::with_client(client, base_url)
    }

    /// Use a preconfigured reqwest client (extra headers, proxy, ...).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let url = absolute_url(&self.base_url, path);

        // --- Curl Logging ---
        let mut parts = Vec::new();
        parts.push(Paint::new("curl").fg(yansi::Color::Green).bold().to_string());
        parts.push(format!("-X {}", Paint::new(method).fg(yansi::Color::Yellow).bold()));
        parts.push(format!("'{}'", Paint::new(&url).fg(yansi::Color::Cyan)));

        if body.is_some() {
            parts.push(format!(
                "{} {}",
                Paint::new("-H").fg(yansi::Color::Magenta),
                Paint::new("'Content-Type: application/json'").fg(yansi::Color::Magenta)
            ));
        }

        if let Some(ref b) = body {
            let json_str = serde_json::to_string_pretty(b).unwrap_or_default();
            let escaped_json = json_str.replace("'", "'\\''");
            parts.push(format!(
                "{} {}",
                Paint::new("-d").fg(yansi::Color::Blue),
                Paint::new(format!("'{}'", escaped_json)).fg(yansi::Color::White)
            ));
        }
        log_output(format!("Request:\n{}", parts.join(" ")));
        // --------------------

        let mut req = match method {
            "GET" => self.client.get(&url),
            "POST" => self.client.post(&url),
            "PUT" => self.client.put(&url),
            "DELETE" => self.client.delete(&url),
            _ => self.client.get(&url),
        };

        if let Some(ref b) = body {
            req = req.json(b);
        }

        let response = req.send().await.map_err(|e| match e.status() {
            Some(code) => ApiError::Http {
                status: code.as_u16(),
                status_text: code.canonical_reason().unwrap_or("").to_string(),
            },
            None => ApiError::Network {
                message: e.to_string(),
            },
        })?;

        let status = response.status();
        if !status.is_success() {
            log_output(format!(
                "Response:\n{}",
                Paint::new(format!("HTTP {}", status)).fg(yansi::Color::Red)
            ));
            return Err(ApiError::Http {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("").to_string(),
            });
        }

        let parsed: Value = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        tracing::debug!(%url, method, "request completed");

        // Dim the response JSON so it reads as secondary output
        let json_str = serde_json::to_string(&parsed).unwrap_or_else(|_| format!("{:?}", parsed));
        log_output(format!(
            "Response:\n{}",
            Paint::new(json_str).rgb(100, 100, 100)
        ));

        Ok(parsed)
    }
}
