use std::time::Duration;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::{BuildError, Matcher, PrometheusBuilder, PrometheusHandle};

// ENTSOE fetch metrics
pub const ENTSOE_FETCH_ATTEMPTS_TOTAL: &str = "entsoe_fetch_attempts_total";
pub const ENTSOE_FETCH_ERRORS_TOTAL: &str = "entsoe_fetch_errors_total";
pub const ENTSOE_FETCH_DURATION_SECONDS: &str = "entsoe_fetch_duration_seconds";
pub const ENTSOE_GAPS_FILLED_TOTAL: &str = "entsoe_gaps_filled_total";

// Currency metrics
pub const CURRENCY_FALLBACKS_TOTAL: &str = "currency_fallbacks_total";

// HTTP request metrics
pub const HTTP_REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";
pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";

fn builder() -> Result<PrometheusBuilder, BuildError> {
    PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Suffix(ENTSOE_FETCH_DURATION_SECONDS.to_string()),
            &[0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0, 60.0],
        )?
        .set_buckets_for_metric(
            Matcher::Suffix(HTTP_REQUEST_DURATION_SECONDS.to_string()),
            &[0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0],
        )
}

/// Install the global Prometheus recorder.
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    builder()?.install_recorder()
}

/// A handle backed by a recorder that is not installed globally.
pub fn detached_handle() -> Result<PrometheusHandle, BuildError> {
    Ok(builder()?.build_recorder().handle())
}

pub fn record_fetch_attempt(eic_code: &str, status: &str) {
    counter!(ENTSOE_FETCH_ATTEMPTS_TOTAL, "eic_code" => eic_code.to_string(), "status" => status.to_string())
        .increment(1);
}

pub fn record_fetch_error(eic_code: &str, error_type: &str) {
    counter!(ENTSOE_FETCH_ERRORS_TOTAL, "eic_code" => eic_code.to_string(), "error_type" => error_type.to_string())
        .increment(1);
}

pub fn record_fetch_duration(eic_code: &str, duration: Duration) {
    histogram!(ENTSOE_FETCH_DURATION_SECONDS, "eic_code" => eic_code.to_string())
        .record(duration.as_secs_f64());
}

pub fn record_gaps_filled(count: u64) {
    counter!(ENTSOE_GAPS_FILLED_TOTAL).increment(count);
}

pub fn record_currency_fallback() {
    counter!(CURRENCY_FALLBACKS_TOTAL).increment(1);
}

pub fn record_http_request(method: &str, path: &str, status: u16, duration: Duration) {
    let status_str = status.to_string();
    counter!(HTTP_REQUESTS_TOTAL, "method" => method.to_string(), "path" => path.to_string(), "status" => status_str.clone())
        .increment(1);
    histogram!(HTTP_REQUEST_DURATION_SECONDS, "method" => method.to_string(), "path" => path.to_string(), "status" => status_str)
        .record(duration.as_secs_f64());
}
