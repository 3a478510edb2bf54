//! Error-to-response translation for the HTTP boundary.
//!
//! A single policy converts internal failure kinds into the uniform wire
//! error shapes. Anything not explicitly recognized collapses to a generic
//! internal error: the underlying cause is logged server-side and never
//! echoed to the client.

use crate::task::domain::{TaskId, ValidationErrors};
use crate::task::services::TaskServiceError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{SecondsFormat, Utc};
use serde_json::json;

/// HTTP-facing failure kinds.
#[derive(Debug)]
pub enum ApiError {
    /// One or more fields failed structural validation; rendered as a 400
    /// with a per-field error map.
    Validation(ValidationErrors),

    /// The addressed task does not exist; rendered as a 404.
    NotFound(TaskId),

    /// Unexpected internal failure; rendered as a fixed, non-leaking 500.
    Internal,
}

impl From<TaskServiceError> for ApiError {
    fn from(err: TaskServiceError) -> Self {
        match err {
            TaskServiceError::Validation(errors) => Self::Validation(errors),
            TaskServiceError::NotFound(id) => Self::NotFound(id),
            TaskServiceError::Repository(cause) => {
                tracing::error!(error = %cause, "repository failure while handling request");
                Self::Internal
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "message": "Validation failed",
                    "status": StatusCode::BAD_REQUEST.as_u16(),
                    "errors": errors,
                })),
            )
                .into_response(),
            Self::NotFound(id) => error_body(
                StatusCode::NOT_FOUND,
                "Not Found",
                &format!("Task with id {id} not found."),
            ),
            Self::Internal => error_body(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal Server Error",
                "An unexpected error occurred",
            ),
        }
    }
}

/// Renders the `{timestamp, status, error, message}` error shape.
fn error_body(status: StatusCode, error: &str, message: &str) -> Response {
    (
        status,
        Json(json!({
            "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            "status": status.as_u16(),
            "error": error,
            "message": message,
        })),
    )
        .into_response()
}
