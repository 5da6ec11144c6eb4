//! Error types for the upstream image-search client.

use thiserror::Error;

/// Errors that can occur when talking to the upstream API.
///
/// A non-success status is not an error here: it is a
/// [`UpstreamReply::Rejected`](super::UpstreamReply::Rejected) and its
/// status is relayed to the client.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// Configured base URL is not a valid absolute URL.
    #[error("Invalid upstream URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// Network-level error during HTTP communication.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// Request exceeded the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// A success response whose body is not a JSON array.
    #[error("Invalid response from upstream: {0}")]
    InvalidResponse(String),
}

impl UpstreamError {
    /// Short label used for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Build(_) => "build",
            UpstreamError::InvalidBaseUrl(_) => "invalid_base_url",
            UpstreamError::Network(_) => "network",
            UpstreamError::Timeout => "timeout",
            UpstreamError::InvalidResponse(_) => "invalid_response",
        }
    }
}

impl From<reqwest::Error> for UpstreamError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            UpstreamError::Timeout
        } else {
            UpstreamError::Network(e)
        }
    }
}
