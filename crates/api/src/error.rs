use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use cbprep_core::error::CoreError;
use cbprep_notify::DeliveryError;

use crate::response::ErrorBody;

/// Message shown to the visitor for every server-side failure.
pub const SERVER_ERROR_MESSAGE: &str = "Server error. Try again or email us.";

/// Application-level error type for HTTP handlers.
///
/// Every variant ends up as one of two outward states: `400` with the
/// validation message, or `500` with [`SERVER_ERROR_MESSAGE`]. Details of
/// server-side failures go to the log, never to the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `cbprep_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The email provider failed or rejected a send.
    #[error(transparent)]
    Delivery(#[from] DeliveryError),

    /// The request body was not valid JSON.
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(CoreError::Validation(msg)) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Core(CoreError::Configuration(var)) => {
                tracing::error!(variable = *var, "Missing required configuration");
                server_error()
            }
            AppError::Delivery(err) => {
                tracing::error!(error = %err, "Email delivery failed");
                server_error()
            }
            AppError::MalformedBody(msg) => {
                tracing::warn!(error = %msg, "Rejected malformed request body");
                server_error()
            }
        };

        let body = ErrorBody {
            ok: false,
            error: message,
        };

        (status, Json(body)).into_response()
    }
}

fn server_error() -> (StatusCode, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        SERVER_ERROR_MESSAGE.to_string(),
    )
}
