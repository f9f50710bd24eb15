//! Request counters for monitoring.

use metrics::{counter, describe_counter};
use tracing::debug;

/// Requests served counter metric name.
pub const METRIC_REQUESTS_SERVED: &str = "http_requests_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_counter!(
        METRIC_REQUESTS_SERVED,
        "Total number of HTTP requests served, labeled by route"
    );

    debug!("Metrics initialized");
}

/// Increment the served-requests counter for a route.
pub fn inc_requests(route: &str) {
    counter!(METRIC_REQUESTS_SERVED, "route" => route.to_string()).increment(1);
}
