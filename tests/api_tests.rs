//! Integration tests for the HTTP API.
//!
//! Drives the full router (middleware and cache layers included) in-process
//! with `tower::ServiceExt::oneshot`.
//!
//! Run with: cargo test --test api_tests

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use demo_service::config::REQUEST_ID_HEADER;
use demo_service::routes::create_router;

const INFO_BODY: &str = concat!(
    r#"{"app":"Spring Demo Gradle","version":"0.0.1-SNAPSHOT","buildType":"Gradle","#,
    r#""features":{"sbom":"enabled","actuator":"enabled","testing":"JUnit5 + JaCoCo + PIT"}}"#
);

fn app() -> Router {
    create_router()
}

async fn get(uri: &str) -> Response {
    app()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn header_str<'a>(response: &'a Response, name: &str) -> &'a str {
    response
        .headers()
        .get(name)
        .unwrap_or_else(|| panic!("missing header {}", name))
        .to_str()
        .unwrap()
}

//
// GET /api/health
//

#[tokio::test]
async fn health_returns_up() {
    let response = get("/api/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header_str(&response, "content-type"), "application/json");
    assert_eq!(header_str(&response, "cache-control"), "no-store");
    assert_eq!(body_string(response).await, r#"{"status":"UP"}"#);
}

#[tokio::test]
async fn health_is_idempotent() {
    for _ in 0..10 {
        let response = get("/api/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_string(response).await, r#"{"status":"UP"}"#);
    }
}

//
// GET /api/info
//

#[tokio::test]
async fn info_returns_build_descriptor() {
    let response = get("/api/info").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(header_str(&response, "content-type"), "application/json");
    assert_eq!(header_str(&response, "cache-control"), "public, max-age=60");
    assert_eq!(body_string(response).await, INFO_BODY);
}

#[tokio::test]
async fn info_fields() {
    let body = body_string(get("/api/info").await).await;
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();

    assert_eq!(json["app"], "Spring Demo Gradle");
    assert_eq!(json["version"], "0.0.1-SNAPSHOT");
    assert_eq!(json["buildType"], "Gradle");
    assert_eq!(json["features"]["sbom"], "enabled");
    assert_eq!(json["features"]["actuator"], "enabled");
    assert_eq!(json["features"]["testing"], "JUnit5 + JaCoCo + PIT");
    assert_eq!(json.as_object().unwrap().len(), 4);
    assert_eq!(json["features"].as_object().unwrap().len(), 3);
}

#[tokio::test]
async fn info_ignores_request_input() {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/api/info?app=Other&version=9")
        .header(header::ACCEPT, "text/plain")
        .header(header::AUTHORIZATION, "Bearer ignored")
        .header("x-custom", "value")
        .body(Body::from(r#"{"app":"Other"}"#))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, INFO_BODY);
}

#[tokio::test]
async fn health_ignores_request_input() {
    let request = Request::builder()
        .uri("/api/health?verbose=true")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"status":"DOWN"}"#))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, r#"{"status":"UP"}"#);
}

#[tokio::test]
async fn concurrent_info_requests_are_identical() {
    let router = app();

    let handles: Vec<_> = (0..100)
        .map(|_| {
            let router = router.clone();
            tokio::spawn(async move {
                let response = router
                    .oneshot(Request::builder().uri("/api/info").body(Body::empty()).unwrap())
                    .await
                    .unwrap();
                assert_eq!(response.status(), StatusCode::OK);
                body_string(response).await
            })
        })
        .collect();

    let bodies = futures::future::join_all(handles).await;
    assert_eq!(bodies.len(), 100);
    for body in bodies {
        assert_eq!(body.unwrap(), INFO_BODY);
    }
}

//
// Framework-level responses
//

#[tokio::test]
async fn every_response_has_request_id() {
    let first = get("/api/health").await;
    let second = get("/api/health").await;

    let first_id = header_str(&first, REQUEST_ID_HEADER).to_owned();
    let second_id = header_str(&second, REQUEST_ID_HEADER).to_owned();
    assert_ne!(first_id, second_id);
}

#[tokio::test]
async fn unknown_route_is_json_404() {
    let response = get("/api/missing").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    assert_eq!(
        body_string(response).await,
        r#"{"error":"Not found: /api/missing"}"#
    );
}

#[tokio::test]
async fn unsupported_method_is_rejected() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
