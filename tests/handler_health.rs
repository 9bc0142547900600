mod common;

use axum::http::StatusCode;
use std::sync::Arc;

#[tokio::test]
async fn test_root_endpoint() {
    let (server, _store) = common::create_test_server(10);

    let response = server.get("/").await;

    response.assert_status_ok();
    response.assert_text("Hello World");
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let (server, _store) = common::create_test_server(10);

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["store"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_endpoint_store_down() {
    let state = linkdrop::AppState::with_store(Arc::new(common::UnreachableStore), 10);
    let server = common::server_for(state);

    let response = server.get("/health").await;

    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["store"]["status"], "error");
}
