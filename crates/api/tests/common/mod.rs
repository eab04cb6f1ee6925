#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use lean_api::config::{CorsOrigins, ServerConfig};
use lean_api::router::build_app_router;
use lean_api::service::Service;
use lean_api::state::AppState;
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_ORIGIN: &str = "http://localhost:5173";

/// Build a test `ServerConfig` backed by an in-memory database.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: CorsOrigins::List(vec![TEST_ORIGIN.parse().unwrap()]),
        request_timeout_secs: 30,
        db_max_connections: 1,
    }
}

/// Build the full application router for `service` on a fresh, migrated
/// in-memory database.
///
/// The router is cheap to clone; clone it once per request.
pub async fn build_test_app(service: Service) -> Router {
    build_test_app_with(service, test_config()).await
}

pub async fn build_test_app_with(service: Service, config: ServerConfig) -> Router {
    let pool = lean_db::create_pool(&config.database_url, config.db_max_connections)
        .await
        .unwrap();
    lean_db::run_migrations(&pool, service.schema())
        .await
        .unwrap();

    let state = AppState {
        pool,
        config: Arc::new(config),
    };
    build_app_router(state, service)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Read the full response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Read a failure envelope: HTTP 200, `code` equal to `expected_code`,
/// `data` null.
pub async fn error_envelope(response: Response<Body>, expected_code: u16) -> Value {
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["code"], expected_code, "unexpected envelope: {json}");
    assert!(json["data"].is_null(), "error envelope carries data: {json}");
    json
}
