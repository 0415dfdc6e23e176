//! Backend trait and HTTP implementation.
//!
//! One outbound request per `diagnose` call: no retry, no debounce. The
//! request timeout is enforced here so a hung backend converts into an error
//! instead of leaving the session loading forever.

use std::time::Duration;

use mdeck_core::prelude::*;
use mdeck_core::{DiagnosticReport, QueryRequest};
use url::Url;

/// Abstraction over the diagnostic backend, so handlers and the runner can
/// be exercised against a scripted backend in tests.
#[trait_variant::make(DiagnosticBackend: Send)]
pub trait LocalDiagnosticBackend {
    /// Submit one diagnostic query and decode the report.
    async fn diagnose(&self, request: QueryRequest) -> Result<DiagnosticReport>;

    /// Probe the backend's health endpoint.
    async fn health(&self) -> bool;
}

/// HTTP client for the diagnostic backend.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    base: Url,
    timeout_secs: u64,
}

impl HttpBackend {
    /// Create a client for the given base address (e.g. `http://localhost:8000`).
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|e| Error::backend_address(e.to_string()))?;
        if !matches!(base.scheme(), "http" | "https") {
            return Err(Error::backend_address(format!(
                "unsupported scheme: {}",
                base.scheme()
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| Error::transport(e.to_string()))?;

        Ok(Self {
            http,
            base,
            timeout_secs,
        })
    }

    /// Base address of the backend, without a trailing slash.
    pub fn base(&self) -> String {
        self.base.as_str().trim_end_matches('/').to_string()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base(), path)
    }

    fn map_send_error(&self, err: reqwest::Error) -> Error {
        if err.is_timeout() {
            Error::timeout(self.timeout_secs)
        } else {
            Error::transport(err.to_string())
        }
    }
}

impl DiagnosticBackend for HttpBackend {
    async fn diagnose(&self, request: QueryRequest) -> Result<DiagnosticReport> {
        let url = self.endpoint("query");
        debug!("POST {url}: {:?}", request.query);

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            warn!("backend returned {status} for query");
            return Err(Error::backend(status.as_u16()));
        }

        let report: DiagnosticReport = response
            .json()
            .await
            .map_err(|e| Error::transport(e.to_string()))?;

        Ok(report.normalize())
    }

    async fn health(&self) -> bool {
        let url = self.endpoint("health");
        match self.http.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("health probe failed: {e}");
                false
            }
        }
    }
}
