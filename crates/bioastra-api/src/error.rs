//! HTTP error mapping.
//!
//! Every failure leaves the server as `{ "success": false, "error": ... }`.
//! Internal detail is logged, never returned.

use std::any::Any;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use bioastra_core::CoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The message is returned to the client as-is.
    #[error("{0}")]
    NotFound(&'static str),

    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    success: bool,
    error: &'static str,
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::StudyNotFound(_) => Self::NotFound("Study not found"),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            Self::NotFound(message) => (StatusCode::NOT_FOUND, *message),
            Self::Internal(detail) => {
                tracing::error!(%detail, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error")
            }
        };
        (status, Json(ErrorBody { success: false, error })).into_response()
    }
}

/// Turns a handler panic into the generic 500 envelope.
pub(crate) fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_else(|| "unknown panic payload".to_string());
    ApiError::Internal(format!("handler panicked: {detail}")).into_response()
}
