//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no router needed.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use cbprep_api::error::{AppError, SERVER_ERROR_MESSAGE};
use cbprep_core::error::CoreError;
use cbprep_notify::DeliveryError;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn validation_error_returns_400_with_message() {
    let err = AppError::Core(CoreError::Validation("Enter a valid email address.".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["ok"], false);
    assert_eq!(json["error"], "Enter a valid email address.");
}

#[tokio::test]
async fn configuration_error_returns_500_without_variable_name() {
    let err = AppError::Core(CoreError::Configuration("RESEND_API_KEY"));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], SERVER_ERROR_MESSAGE);
    assert!(!json.to_string().contains("RESEND"));
}

#[tokio::test]
async fn delivery_error_returns_500_and_sanitizes_message() {
    let err = AppError::Delivery(DeliveryError::Rejected {
        status: 403,
        message: "API key re_secret is invalid".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!json.to_string().contains("re_secret"));
    assert_eq!(json["error"], SERVER_ERROR_MESSAGE);
}

#[tokio::test]
async fn malformed_body_returns_500() {
    let err = AppError::MalformedBody("EOF while parsing".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["ok"], false);
    assert_eq!(json["error"], SERVER_ERROR_MESSAGE);
}

#[test]
fn core_errors_convert_into_app_error() {
    let err: AppError = CoreError::Validation("bad".into()).into();
    assert_matches!(err, AppError::Core(CoreError::Validation(_)));
}
