//! Metrics collection.
//!
//! # Metrics
//! - `shell_navigations_total` (counter): navigations by view and kind
//! - `shell_requests_total` (counter): outgoing requests by method, status
//! - `shell_request_duration_seconds` (histogram): request latency
//!
//! # Design Decisions
//! - Status `0` labels requests that never got a response
//! - Recording is a no-op until a recorder is installed

use std::time::Instant;

use ::metrics::{counter, histogram};

/// Record a completed (or failed) outgoing request.
pub fn record_request(method: &str, status: u16, start: Instant) {
    let status = status.to_string();
    counter!(
        "shell_requests_total",
        "method" => method.to_string(),
        "status" => status.clone()
    )
    .increment(1);
    histogram!(
        "shell_request_duration_seconds",
        "method" => method.to_string(),
        "status" => status
    )
    .record(start.elapsed().as_secs_f64());
}

/// Record a navigation that mounted `view`.
pub fn record_navigation(view: &str, kind: &'static str) {
    counter!("shell_navigations_total", "view" => view.to_string(), "kind" => kind).increment(1);
}
