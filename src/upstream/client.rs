//! Image-search API client.
//!
//! # Responsibilities
//! - Build the search URL, optionally filtered by breed
//! - Attach the `x-api-key` credential
//! - Issue exactly one GET per call (no retries, no caching)
//! - Classify the outcome for the relay handler

use std::time::Duration;

use axum::body::Bytes;
use axum::http::StatusCode;
use reqwest::Client;
use serde::de::IgnoredAny;
use serde::Deserialize;
use url::Url;

use crate::config::{ApiKey, UpstreamConfig};
use crate::upstream::error::UpstreamError;

/// Header carrying the credential on every outbound call.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Message used when an upstream error carries no usable `message`.
pub const FALLBACK_ERROR_MESSAGE: &str = "Error from Dog API";

/// Outcome of a search that reached the upstream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamReply {
    /// Non-empty JSON array, kept as the exact bytes received.
    Found(Bytes),
    /// Success with an empty JSON array.
    Empty,
    /// Non-success status with the best available message.
    Rejected { status: StatusCode, message: String },
}

/// Error envelope the upstream returns on failure. Every field is optional.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    message: Option<String>,
}

/// Client for the upstream image-search endpoint.
///
/// Cheap to clone; the inner `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct DogApiClient {
    http_client: Client,
    base_url: Url,
    api_key: Option<ApiKey>,
}

impl DogApiClient {
    /// Create a client from configuration.
    pub fn new(config: &UpstreamConfig) -> Result<Self, UpstreamError> {
        let base_url = Url::parse(&config.base_url)?;

        let mut builder = Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        // Loopback upstreams never go through a system proxy.
        if is_loopback(&base_url) {
            builder = builder.no_proxy();
        }
        let http_client = builder.build().map_err(UpstreamError::Build)?;

        Ok(Self {
            http_client,
            base_url,
            api_key: config.api_key.clone(),
        })
    }

    /// Point the client at a different search endpoint.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, UpstreamError> {
        self.base_url = Url::parse(base_url)?;
        Ok(self)
    }

    /// Search URL, with `breed_ids` appended once when a breed is given.
    pub fn search_url(&self, breed: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Some(breed) = breed.filter(|b| !b.is_empty()) {
            url.query_pairs_mut().append_pair("breed_ids", breed);
        }
        url
    }

    /// Run one search against the upstream.
    #[tracing::instrument(skip(self), fields(url = tracing::field::Empty))]
    pub async fn search(&self, breed: Option<&str>) -> Result<UpstreamReply, UpstreamError> {
        let url = self.search_url(breed);
        tracing::Span::current().record("url", tracing::field::display(&url));

        let mut request = self.http_client.get(url);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key.expose());
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        tracing::debug!(status = %status, bytes = body.len(), "Upstream responded");

        if !status.is_success() {
            return Ok(UpstreamReply::Rejected {
                status,
                message: error_message(&body),
            });
        }

        classify_payload(body)
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(url::Host::Domain(domain)) => domain == "localhost",
        Some(url::Host::Ipv4(ip)) => ip.is_loopback(),
        Some(url::Host::Ipv6(ip)) => ip.is_loopback(),
        None => false,
    }
}

/// Decide between `Found` and `Empty` for a success body.
///
/// Only the top-level element count is inspected; anything that is not a
/// JSON array is an invalid response.
fn classify_payload(body: Bytes) -> Result<UpstreamReply, UpstreamError> {
    let items: Vec<IgnoredAny> = serde_json::from_slice(&body)
        .map_err(|e| UpstreamError::InvalidResponse(format!("expected a JSON array: {e}")))?;

    if items.is_empty() {
        Ok(UpstreamReply::Empty)
    } else {
        Ok(UpstreamReply::Found(body))
    }
}

/// Pull `message` out of an upstream error body, never failing.
fn error_message(body: &[u8]) -> String {
    serde_json::from_slice::<ErrorEnvelope>(body)
        .ok()
        .and_then(|envelope| envelope.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
}
