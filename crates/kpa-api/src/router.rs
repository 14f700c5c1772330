use axum::{Router, http::StatusCode, middleware, response::IntoResponse, routing::get};
use tower_http::trace::TraceLayer;

use crate::{
    metrics::track_metrics,
    middleware::{
        cors::create_cors_layer, request_id::request_id_middleware,
        security_headers::apply_security_headers,
    },
    state::ApiState,
    v1,
};

/// Application routes without state or middleware
pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/health", get(health))
        .nest("/v1", v1::routes())
        .fallback(handler_404)
}

/// Fully layered application: routes, request ids, tracing, metrics, CORS
/// and security headers
pub fn app(state: ApiState) -> Router {
    let cors = create_cors_layer(&state.allowed_origins);
    let environment = state.environment;

    let router = router()
        .with_state(state)
        .layer(middleware::from_fn(track_metrics))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors);

    apply_security_headers(router, environment)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
