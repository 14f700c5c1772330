//! Prometheus metrics for monitoring request volume, latency and grading.

use std::time::Instant;

use axum::{
    extract::{MatchedPath, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use kpa_catalog::RecordingType;
use kpa_scoring::Grade;
use metrics::{counter, histogram};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};

/// Path label of requests that matched no route
pub const UNMATCHED_PATH: &str = "unmatched";

/// Initialize Prometheus metrics exporter
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let builder = PrometheusBuilder::new();

    // Histogram buckets for request duration (in seconds)
    let builder = builder.set_buckets_for_metric(
        Matcher::Full("http_request_duration_seconds".to_string()),
        &[
            0.001, 0.0025, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0,
        ],
    )?;

    let handle = builder.install_recorder()?;

    Ok(handle)
}

/// Middleware to record HTTP request metrics
pub async fn track_metrics(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().to_string();
    let path = path_label(&req);

    let response = next.run(req).await;

    let duration = start.elapsed().as_secs_f64();
    let status = response.status().as_u16().to_string();

    counter!(
        "http_requests_total",
        "method" => method.clone(),
        "path" => path.clone(),
        "status" => status.clone()
    )
    .increment(1);

    histogram!(
        "http_request_duration_seconds",
        "method" => method,
        "path" => path,
        "status" => status
    )
    .record(duration);

    response
}

/// Metrics label for the request path: the route template it matched
/// (e.g. `/v1/pronunciation/sets/{set_id}`), or [`UNMATCHED_PATH`].
/// Path parameters never become label values, keeping series bounded.
pub fn path_label(req: &Request) -> String {
    req.extensions()
        .get::<MatchedPath>()
        .map_or_else(|| UNMATCHED_PATH.to_string(), |path| path.as_str().to_string())
}

/// Handler for the /metrics endpoint
pub async fn metrics_handler(State(handle): State<PrometheusHandle>) -> impl IntoResponse {
    (StatusCode::OK, handle.render())
}

/// Record a transcript evaluation
pub fn record_evaluation(recording_type: Option<RecordingType>, grade: Grade) {
    let recording_type = recording_type.map_or("unknown", |t| t.as_str());

    counter!(
        "evaluations_total",
        "recording_type" => recording_type,
        "grade" => grade.as_str()
    )
    .increment(1);
}

/// Record a content assignment
pub fn record_assignment(kind: &'static str, set_id: &str) {
    counter!(
        "assignments_total",
        "kind" => kind,
        "set_id" => set_id.to_string()
    )
    .increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{HeaderValue, Request},
        middleware::{self, Next},
    };
    use kpa_catalog::Catalog;
    use tower::ServiceExt;

    use crate::{config::Environment, router::router, state::ApiState};

    const LABEL_HEADER: &str = "x-path-label";

    async fn echo_label(req: Request<Body>, next: Next) -> Response {
        let label = path_label(&req);
        let mut response = next.run(req).await;
        response
            .headers_mut()
            .insert(LABEL_HEADER, HeaderValue::from_str(&label).unwrap());
        response
    }

    fn app() -> Router {
        let state = ApiState::with_catalog(
            Catalog::builtin().unwrap(),
            Environment::Development,
            Vec::new(),
        );
        router()
            .with_state(state)
            .layer(middleware::from_fn(echo_label))
    }

    async fn label_for(uri: &str) -> String {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        response.headers()[LABEL_HEADER].to_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn test_path_parameters_share_a_label() {
        assert_eq!(
            label_for("/v1/pronunciation/sets/aaaa1").await,
            "/v1/pronunciation/sets/{set_id}"
        );
        assert_eq!(
            label_for("/v1/pronunciation/sets/zzzz2").await,
            "/v1/pronunciation/sets/{set_id}"
        );
        assert_eq!(
            label_for("/v1/speaking/sets/Q").await,
            "/v1/speaking/sets/{set_id}"
        );
        assert_eq!(
            label_for("/v1/pronunciation/assignments/P_123456").await,
            "/v1/pronunciation/assignments/{participant_id}"
        );
        assert_eq!(label_for("/health").await, "/health");
    }

    #[tokio::test]
    async fn test_unmatched_paths_share_a_label() {
        assert_eq!(label_for("/v1/random/garbage/xyz").await, UNMATCHED_PATH);
        assert_eq!(label_for("/nope").await, UNMATCHED_PATH);
    }

    #[test]
    fn test_record_without_recorder() {
        // Without an installed recorder the macros are no-ops
        record_evaluation(Some(RecordingType::Word), Grade::High);
        record_evaluation(None, Grade::Low);
        record_assignment("pronunciation", "A");
    }
}
