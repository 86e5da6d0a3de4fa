//! Shared HTTP plumbing for upstream clients.

use std::time::Duration;

use catalog_core::correlation::{self, CORRELATION_ID_HEADER};
use catalog_core::enrichment::EnrichmentError;
use opentelemetry::propagation::Injector;
use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing_opentelemetry::OpenTelemetrySpanExt;

/// Errors raised while constructing an upstream client.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The endpoint is empty.
    #[error("upstream endpoint not configured")]
    MissingEndpoint,

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// A base URL plus an HTTP client with a fixed per-request timeout.
#[derive(Debug, Clone)]
pub struct UpstreamHttp {
    client: Client,
    base_url: String,
}

impl UpstreamHttp {
    /// Build a client for `base_url` whose requests time out after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::MissingEndpoint` for an empty URL and
    /// `UpstreamError::Client` if the TLS backend cannot be initialized.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, UpstreamError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(UpstreamError::MissingEndpoint);
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.to_owned(),
        })
    }

    /// The normalized base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `path` relative to the base URL and decode a JSON body.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, EnrichmentError> {
        let response = self
            .client
            .get(format!("{}{path}", self.base_url))
            .headers(outgoing_headers())
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            return Err(EnrichmentError::Status(status.as_u16()));
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                EnrichmentError::Timeout
            } else {
                EnrichmentError::Decode(e.to_string())
            }
        })
    }
}

fn classify(err: reqwest::Error) -> EnrichmentError {
    if err.is_timeout() {
        EnrichmentError::Timeout
    } else {
        EnrichmentError::Transport(err.to_string())
    }
}

/// Correlation id and W3C trace context for the current request.
fn outgoing_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Some(id) = correlation::current() {
        if let Ok(value) = HeaderValue::from_str(id.as_str()) {
            headers.insert(CORRELATION_ID_HEADER, value);
        }
    }

    let cx = tracing::Span::current().context();
    opentelemetry::global::get_text_map_propagator(|propagator| {
        propagator.inject_context(&cx, &mut HeaderInjector(&mut headers));
    });
    headers
}

/// Adapter to inject OTel context into reqwest headers.
struct HeaderInjector<'a>(&'a mut HeaderMap);

impl Injector for HeaderInjector<'_> {
    fn set(&mut self, key: &str, value: String) {
        if let (Ok(name), Ok(value)) = (
            HeaderName::from_bytes(key.as_bytes()),
            HeaderValue::from_str(&value),
        ) {
            self.0.insert(name, value);
        }
    }
}
