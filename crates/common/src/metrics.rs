use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static UPSTREAM_FETCH_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "wisata_upstream_fetch_total",
        "Total collection fetches issued to remote services",
        &["service"]
    )
    .expect("register upstream_fetch_total")
});

pub static UPSTREAM_ERRORS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "wisata_upstream_errors_total",
        "Total failed collection fetches by remote service",
        &["service"]
    )
    .expect("register upstream_errors_total")
});

pub static JOIN_REQUESTS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "wisata_join_requests_total",
        "Total joined views computed, by entity pair and strategy",
        &["pair", "strategy"]
    )
    .expect("register join_requests_total")
});

pub fn record_upstream_fetch(service: &str) {
    UPSTREAM_FETCH_TOTAL.with_label_values(&[service]).inc();
}

pub fn record_upstream_error(service: &str) {
    UPSTREAM_ERRORS_TOTAL.with_label_values(&[service]).inc();
}

pub fn record_join(pair: &str, strategy: &str) {
    JOIN_REQUESTS_TOTAL.with_label_values(&[pair, strategy]).inc();
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
