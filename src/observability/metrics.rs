//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_requests_total` (counter): relayed requests by client-visible status
//! - `relay_request_duration_seconds` (histogram): end-to-end latency
//! - `relay_upstream_errors_total` (counter): transport failures by kind

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus recorder and its scrape listener.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics endpoint listening"),
        Err(e) => tracing::error!(error = %e, "Failed to install metrics exporter"),
    }
}

/// Record one relayed request.
pub fn record_request(status: u16, start: Instant) {
    counter!("relay_requests_total", "status" => status.to_string()).increment(1);
    histogram!("relay_request_duration_seconds").record(start.elapsed().as_secs_f64());
}

/// Record an upstream call that never produced a usable reply.
pub fn record_upstream_error(kind: &'static str) {
    counter!("relay_upstream_errors_total", "kind" => kind).increment(1);
}
