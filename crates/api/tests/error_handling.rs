//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each `AppError` variant produces the correct HTTP
//! status code, error code, and message. They call `IntoResponse` directly on
//! `AppError` values, with no router involved.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use rateboard_api::error::AppError;
use rateboard_core::error::CoreError;
use rateboard_core::types::DbId;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let id = DbId::new_v4();
    let err = AppError::Core(CoreError::NotFound {
        entity: "Freelancer",
        id,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], format!("Freelancer with id {id} not found"));
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation(
        "basic_package: delivery_days must be at least 1".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(
        json["error"],
        "basic_package: delivery_days must be at least 1"
    );
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}

#[tokio::test]
async fn unauthorized_error_returns_401() {
    let err = AppError::Core(CoreError::Unauthorized("Missing Authorization header".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Missing Authorization header");
}

#[tokio::test]
async fn forbidden_error_returns_403() {
    let err = AppError::Core(CoreError::Forbidden(
        "Not authorized to update this freelancer's pricing".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "FORBIDDEN");
    assert_eq!(
        json["error"],
        "Not authorized to update this freelancer's pricing"
    );
}

#[tokio::test]
async fn core_internal_error_returns_500_with_message() {
    let err = AppError::Core(CoreError::Internal("connection refused".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "connection refused");
}
