//! Client-facing error responses.
//!
//! Every failure is turned into `{"error": "<message>"}` here. Internal
//! details never reach the client; they are logged where they occur.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Body for an empty upstream result set.
pub const NOT_FOUND_MESSAGE: &str = "No dog data found for the specified breed";

/// Body for every failure that is not the upstream's own error.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// JSON error envelope returned to clients.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Failures of a relayed request, as seen by the client.
#[derive(Debug, Error)]
pub enum RelayError {
    /// Upstream succeeded with zero results.
    #[error("no dog data found")]
    NotFound,

    /// Upstream answered with a non-success status.
    #[error("upstream returned {status}: {message}")]
    Upstream { status: StatusCode, message: String },

    /// Transport failure, malformed payload or anything unexpected.
    #[error("internal relay failure")]
    Internal,
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::NotFound => StatusCode::NOT_FOUND,
            RelayError::Upstream { status, .. } => *status,
            RelayError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn client_message(self) -> String {
        match self {
            RelayError::NotFound => NOT_FOUND_MESSAGE.to_string(),
            RelayError::Upstream { message, .. } => message,
            RelayError::Internal => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.client_message(),
        };
        (status, Json(body)).into_response()
    }
}
