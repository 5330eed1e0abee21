//! Prometheus metrics
//!
//! Counters are recorded through the `metrics` facade; the exporter renders
//! them at `/metrics`.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

use crate::state::AppState;

const SUBMISSIONS_TOTAL: &str = "assistant_submissions_total";
const REPLIES_TOTAL: &str = "assistant_replies_total";
const SESSIONS_CREATED_TOTAL: &str = "assistant_sessions_created_total";

static HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Install the global Prometheus recorder
///
/// Only the first call installs; later calls return the same handle.
pub fn init_metrics() -> Option<PrometheusHandle> {
    HANDLE
        .get_or_try_init(|| {
            let handle = PrometheusBuilder::new().install_recorder()?;
            metrics::describe_counter!(SUBMISSIONS_TOTAL, "Visitor messages accepted");
            metrics::describe_counter!(REPLIES_TOTAL, "Assistant replies appended, by rule");
            metrics::describe_counter!(SESSIONS_CREATED_TOTAL, "Chat sessions created");
            Ok::<_, metrics_exporter_prometheus::BuildError>(handle)
        })
        .map_err(|e| tracing::warn!(error = %e, "Failed to install Prometheus recorder"))
        .ok()
        .cloned()
}

pub fn record_submission() {
    metrics::counter!(SUBMISSIONS_TOTAL).increment(1);
}

pub fn record_reply(rule: &'static str) {
    metrics::counter!(REPLIES_TOTAL, "rule" => rule).increment(1);
}

pub fn record_session_created() {
    metrics::counter!(SESSIONS_CREATED_TOTAL).increment(1);
}

/// `GET /metrics`
pub async fn metrics_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.metrics() {
        Some(handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        ),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            String::from("# metrics disabled\n"),
        ),
    }
}
