//! Integration tests for the gateway surface that precedes storage:
//! health, CORS, API-key rejection, and body parsing.

mod helpers;

use axum::body::Body;
use http::{Request, StatusCode};
use tower::ServiceExt;

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.get("status").unwrap().as_str().unwrap(), "ok");
}

#[tokio::test]
async fn test_sync_without_api_key_is_rejected() {
    let app = helpers::TestApp::new();

    for route in [
        "/api/sync/appointments",
        "/api/sync/medications",
        "/api/sync/exams",
        "/api/sync/documents",
    ] {
        let response = app
            .request(
                "POST",
                route,
                Some(serde_json::json!({
                    "patient_cpf": "12345678900",
                    "appointments": []
                })),
                None,
            )
            .await;

        assert_eq!(response.status, StatusCode::UNAUTHORIZED, "route {route}");
        assert_eq!(
            response.body.get("error").unwrap().as_str().unwrap(),
            "MISSING_API_KEY",
            "route {route}"
        );
    }
}

#[tokio::test]
async fn test_blank_api_key_counts_as_missing() {
    let app = helpers::TestApp::new();

    let response = app
        .request("POST", "/api/sync/appointments", None, Some("   "))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body.get("error").unwrap().as_str().unwrap(),
        "MISSING_API_KEY"
    );
}

#[tokio::test]
async fn test_storage_request_rejects_malformed_body() {
    let app = helpers::TestApp::new();

    let request = Request::builder()
        .method("POST")
        .uri("/api/notifications/storage-request")
        .header("Content-Type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_cors_preflight_is_open() {
    let app = helpers::TestApp::new();

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/api/sync/appointments")
        .header("Origin", "https://erp.hospital.example")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "x-api-key,content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/sync/unknown", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
