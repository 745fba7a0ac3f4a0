#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use relief_core::seed::seed_villages;
use relief_core::village::VillageRecord;
use serde_json::Value;
use tower::ServiceExt;

use relief_api::auth::session::{issue_session, SessionConfig};
use relief_api::config::ServerConfig;
use relief_api::router::build_app_router;
use relief_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a fixed signing secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        villages_path: None,
        session: SessionConfig {
            secret: "integration-test-secret".to_string(),
            expiry_mins: 30,
        },
    }
}

/// Full application router over the built-in seed directory.
pub fn build_test_app() -> Router {
    build_test_app_with(seed_villages())
}

/// Full application router over the given directory.
///
/// Goes through [`build_app_router`] so tests exercise the production
/// middleware stack (CORS, request ID, timeout, tracing, panic recovery).
pub fn build_test_app_with(villages: Vec<VillageRecord>) -> Router {
    build_app_router(AppState::new(test_config(), villages))
}

/// A valid session token signed with the test secret.
pub fn session_token() -> String {
    issue_session("relief@ngo.org", &test_config().session)
        .expect("session should issue")
        .token
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request should complete")
}

/// Unauthenticated GET.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// GET with a valid session.
pub async fn get_authed(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header("authorization", format!("Bearer {}", session_token()))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// POST a JSON body, optionally with a session.
pub async fn post_json(app: Router, uri: &str, body: Value, authed: bool) -> Response<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json");
    if authed {
        builder = builder.header("authorization", format!("Bearer {}", session_token()));
    }
    send(app, builder.body(Body::from(body.to_string())).unwrap()).await
}

/// POST a raw body with an optional content type, optionally with a session.
pub async fn post_raw(
    app: Router,
    uri: &str,
    body: &'static str,
    content_type: Option<&str>,
    authed: bool,
) -> Response<Body> {
    let mut builder = Request::builder().method(Method::POST).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    if authed {
        builder = builder.header("authorization", format!("Bearer {}", session_token()));
    }
    send(app, builder.body(Body::from(body)).unwrap()).await
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

/// Village names from a `{ "data": [...] }` list response.
pub fn village_names(json: &Value) -> Vec<String> {
    json["data"]
        .as_array()
        .expect("data should be an array")
        .iter()
        .map(|v| v["village"].as_str().unwrap().to_string())
        .collect()
}
