//! `GET /api/dogs`: the relay handler.
//!
//! One inbound request maps to exactly one upstream search. The upstream
//! call runs on its own task so a client hanging up does not abort it.

use std::time::Instant;

use axum::{
    extract::{RawQuery, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
};

use crate::http::request::RequestIdExt;
use crate::http::response::RelayError;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::upstream::UpstreamReply;

/// Query parameter carrying the breed identifier.
pub const BREED_PARAM: &str = "breed";

/// Extract the breed filter from a raw query string.
///
/// Empty values are ignored. Repeated `breed` parameters are joined with
/// commas, which the upstream accepts as a list of breed IDs.
pub fn breed_filter(query: Option<&str>) -> Option<String> {
    let breeds: Vec<String> = url::form_urlencoded::parse(query?.as_bytes())
        .filter(|(key, value)| key == BREED_PARAM && !value.is_empty())
        .map(|(_, value)| value.into_owned())
        .collect();

    if breeds.is_empty() {
        None
    } else {
        Some(breeds.join(","))
    }
}

pub async fn get_dogs(
    State(state): State<AppState>,
    headers: HeaderMap,
    RawQuery(query): RawQuery,
) -> Response {
    let start = Instant::now();
    let request_id = headers.request_id().to_string();
    let breed = breed_filter(query.as_deref());

    tracing::debug!(request_id = %request_id, breed = ?breed, "Relaying dog search");

    let response = match relay(&state, breed).await {
        Ok(response) => response,
        Err(e) => {
            if let RelayError::Upstream { status, message } = &e {
                tracing::warn!(request_id = %request_id, status = %status, message = %message, "Upstream rejected request");
            }
            e.into_response()
        }
    };

    metrics::record_request(response.status().as_u16(), start);
    response
}

async fn relay(state: &AppState, breed: Option<String>) -> Result<Response, RelayError> {
    let client = state.upstream.clone();
    let outcome = tokio::spawn(async move { client.search(breed.as_deref()).await })
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Upstream task failed");
            RelayError::Internal
        })?;

    let reply = outcome.map_err(|e| {
        tracing::error!(error = %e, "Upstream request failed");
        metrics::record_upstream_error(e.kind());
        RelayError::Internal
    })?;

    match reply {
        UpstreamReply::Found(body) => {
            Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
        }
        UpstreamReply::Empty => Err(RelayError::NotFound),
        UpstreamReply::Rejected { status, message } => Err(RelayError::Upstream { status, message }),
    }
}
