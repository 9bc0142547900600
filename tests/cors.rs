mod common;

use axum::http::{HeaderValue, Method, header};

#[tokio::test]
async fn test_allowed_origin_gets_credentialed_grant() {
    let (server, _store) = common::create_test_server(10);

    let response = server
        .get("/")
        .add_header(header::ORIGIN, HeaderValue::from_static(common::FRONTEND_ORIGIN))
        .await;

    response.assert_status_ok();
    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        common::FRONTEND_ORIGIN
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}

#[tokio::test]
async fn test_unknown_origin_gets_no_grant() {
    let (server, _store) = common::create_test_server(10);

    let response = server
        .get("/")
        .add_header(header::ORIGIN, HeaderValue::from_static("https://evil.example.org"))
        .await;

    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}

#[tokio::test]
async fn test_preflight_for_create_url() {
    let (server, _store) = common::create_test_server(10);

    let response = server
        .method(Method::OPTIONS, "/api/create_url")
        .add_header(header::ORIGIN, HeaderValue::from_static(common::FRONTEND_ORIGIN))
        .add_header(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("POST"),
        )
        .add_header(
            header::ACCESS_CONTROL_REQUEST_HEADERS,
            HeaderValue::from_static("content-type"),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        common::FRONTEND_ORIGIN
    );
}
