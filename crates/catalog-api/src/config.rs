//! Gateway configuration read from the environment.

use std::fmt::Display;
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use catalog_core::enrichment::EnrichmentClient;
use catalog_products::application::aggregator::DEFAULT_LIST_CONCURRENCY;
use catalog_upstream::{PricingClient, RatingClient};

use crate::error::AppError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_UPSTREAM_TIMEOUT_MS: u64 = 2000;

/// Runtime configuration for the catalog gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// PostgreSQL connection string for the product store.
    pub database_url: String,
    /// Listen host.
    pub host: String,
    /// Listen port.
    pub port: u16,
    /// Pricing service base URL, if pricing enrichment is enabled.
    pub pricing_endpoint: Option<String>,
    /// Rating service base URL, if rating enrichment is enabled.
    pub rating_endpoint: Option<String>,
    /// Per-call timeout applied by each enrichment client.
    pub upstream_timeout: Duration,
    /// Products enriched concurrently while listing.
    pub list_concurrency: usize,
    /// OTLP collector endpoint; span export is off when unset.
    pub otlp_endpoint: Option<String>,
}

impl CatalogConfig {
    /// Read configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `DATABASE_URL` is missing or a numeric
    /// variable does not parse.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `DATABASE_URL` is missing or a numeric
    /// variable does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let database_url = non_empty(lookup("DATABASE_URL")).ok_or_else(|| {
            AppError::Config("DATABASE_URL environment variable must be set".to_owned())
        })?;
        let timeout_ms: u64 = parse_or(&lookup, "UPSTREAM_TIMEOUT_MS", DEFAULT_UPSTREAM_TIMEOUT_MS)?;

        Ok(Self {
            database_url,
            host: non_empty(lookup("HOST")).unwrap_or_else(|| DEFAULT_HOST.to_owned()),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            pricing_endpoint: non_empty(lookup("APP_PRICING_ENDPOINT")),
            rating_endpoint: non_empty(lookup("APP_RATING_ENDPOINT")),
            upstream_timeout: Duration::from_millis(timeout_ms),
            list_concurrency: parse_or(&lookup, "LIST_CONCURRENCY", DEFAULT_LIST_CONCURRENCY)?,
            otlp_endpoint: non_empty(lookup("OTEL_EXPORTER_OTLP_ENDPOINT")),
        })
    }

    /// The socket address to listen on.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `host:port` is not a socket address.
    pub fn listen_addr(&self) -> Result<SocketAddr, AppError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))
    }

    /// One client per configured upstream: pricing first, then rating.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Upstream` if a client cannot be built.
    pub fn enrichment_clients(&self) -> Result<Vec<Arc<dyn EnrichmentClient>>, AppError> {
        let mut clients: Vec<Arc<dyn EnrichmentClient>> = Vec::new();
        if let Some(endpoint) = &self.pricing_endpoint {
            clients.push(Arc::new(PricingClient::new(endpoint, self.upstream_timeout)?));
        }
        if let Some(endpoint) = &self.rating_endpoint {
            clients.push(Arc::new(RatingClient::new(endpoint, self.upstream_timeout)?));
        }
        Ok(clients)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: Display,
{
    match non_empty(lookup(key)) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| AppError::Config(format!("{key} must be a valid number: {e}"))),
        None => Ok(default),
    }
}
