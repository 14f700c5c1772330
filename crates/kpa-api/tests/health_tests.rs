use axum::http::StatusCode;

use crate::common::default_client;

#[tokio::test]
async fn test_health_check() {
    let client = default_client();

    let response = client.get("/health").await;

    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_falls_back_to_404() {
    let client = default_client();

    let response = client.get("/v1/nothing-here").await;

    response.assert_status(StatusCode::NOT_FOUND);
    assert_eq!(response.text(), "The requested resource was not found");
}

#[tokio::test]
async fn test_request_id_is_generated() {
    let client = default_client();

    let response = client.get("/health").await;

    let request_id = response
        .headers
        .get("x-request-id")
        .expect("Response should carry a request id")
        .to_str()
        .unwrap();
    assert!(uuid::Uuid::parse_str(request_id).is_ok());
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let client = default_client();

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/health")
        .header("x-request-id", "trace-me-42")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = client.request(request).await;

    response.assert_status(StatusCode::OK);
    assert_eq!(response.headers.get("x-request-id").unwrap(), "trace-me-42");
}

#[tokio::test]
async fn test_security_headers_are_applied() {
    let client = default_client();

    let response = client.get("/health").await;

    assert_eq!(
        response.headers.get("x-content-type-options").unwrap(),
        "nosniff"
    );
}

#[tokio::test]
async fn test_hsts_only_in_production() {
    use kpa_api::{config::Environment, router};

    use crate::common::{TestClient, TestStateBuilder};

    let state = TestStateBuilder::new()
        .environment(Environment::Production)
        .build();
    let client = TestClient::new(router::app(state));

    let response = client.get("/health").await;
    assert!(response.headers.contains_key("strict-transport-security"));

    let response = default_client().get("/health").await;
    assert!(!response.headers.contains_key("strict-transport-security"));
}
