//! Tests for `AppError` → envelope mapping.
//!
//! These tests call `IntoResponse` directly on `AppError` values; no HTTP
//! server is involved. Every error is sent with HTTP 200 and the category in
//! the envelope `code`.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use lean_api::error::{
    AppError, INTERNAL_ERROR_MESSAGE, METHOD_NOT_ALLOWED_MESSAGE, ROUTE_NOT_FOUND_MESSAGE,
};
use lean_core::error::CoreError;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_is_code_404() {
    let (status, json) = error_to_response(AppError::not_found("Article", 42)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["code"], 404);
    assert_eq!(json["message"], "Article not found");
    assert!(json["data"].is_null());
}

#[tokio::test]
async fn validation_error_is_code_400() {
    let err = AppError::Core(CoreError::Validation("Title is required".into()));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["code"], 400);
    assert_eq!(json["message"], "Title is required");
}

#[tokio::test]
async fn bad_request_error_is_code_400() {
    let (status, json) = error_to_response(AppError::BadRequest("bad".into())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["code"], 400);
    assert_eq!(json["message"], "bad");
}

#[tokio::test]
async fn routing_errors_use_fixed_messages() {
    let (status, json) = error_to_response(AppError::RouteNotFound("/api/x".into())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["code"], 404);
    assert_eq!(json["message"], ROUTE_NOT_FOUND_MESSAGE);

    let (_, json) = error_to_response(AppError::MethodNotAllowed("PATCH".into())).await;
    assert_eq!(json["code"], 405);
    assert_eq!(json["message"], METHOD_NOT_ALLOWED_MESSAGE);
}

#[tokio::test]
async fn database_error_is_sanitized() {
    let err = AppError::Database(sqlx::Error::Protocol(
        "secret database credentials leaked".into(),
    ));
    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["code"], 500);
    assert_eq!(json["message"], INTERNAL_ERROR_MESSAGE);
    assert!(
        !json.to_string().contains("secret"),
        "Internal error response must not leak sensitive details"
    );
}

#[tokio::test]
async fn pool_timeout_is_code_500() {
    let (_, json) = error_to_response(AppError::Database(sqlx::Error::PoolTimedOut)).await;

    assert_eq!(json["code"], 500);
    assert_eq!(json["message"], INTERNAL_ERROR_MESSAGE);
}

#[tokio::test]
async fn row_not_found_is_code_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["code"], 404);
}
