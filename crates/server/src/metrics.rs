//! Prometheus metrics for the allocation endpoint.

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

static PROMETHEUS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the Prometheus recorder and describe the metrics. Call once at
/// startup, before the router starts serving.
pub fn init_metrics() -> PrometheusHandle {
    let handle = PROMETHEUS_HANDLE
        .get_or_init(|| {
            PrometheusBuilder::new()
                .install_recorder()
                .expect("failed to install Prometheus recorder")
        })
        .clone();

    metrics::describe_counter!(
        "allocator_requests_total",
        "Allocation requests completed successfully"
    );
    metrics::describe_counter!(
        "allocator_validation_failures_total",
        "Allocation requests rejected by validation"
    );
    metrics::describe_counter!(
        "allocator_unreconciled_total",
        "Allocations that left kitty units unplaced"
    );
    metrics::describe_histogram!("allocator_roster_size", "Agents per allocation request");

    handle
}

/// Render the Prometheus exposition format.
pub async fn metrics_handler() -> String {
    PROMETHEUS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_default()
}

/// Record one completed allocation.
pub fn record_allocation(roster_size: usize, unreconciled: bool) {
    metrics::counter!("allocator_requests_total").increment(1);
    metrics::histogram!("allocator_roster_size").record(roster_size as f64);
    if unreconciled {
        metrics::counter!("allocator_unreconciled_total").increment(1);
    }
}

/// Record one rejected request.
pub fn record_validation_failure() {
    metrics::counter!("allocator_validation_failures_total").increment(1);
}
