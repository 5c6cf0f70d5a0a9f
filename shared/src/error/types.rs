//! Error type and the JSON error body

use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Application error with a structured error code
///
/// Rendered to clients as `{"error": {<kind>: <message>}}` where `kind` is the
/// reason phrase of the mapped HTTP status (`"Not Found"`, `"Forbidden"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a missing-field error
    pub fn required_field(field: &str) -> Self {
        Self::with_message(
            ErrorCode::RequiredField,
            format!("Missing required field: {field}"),
        )
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::NotFound, msg)
    }

    /// Create an already exists error
    pub fn already_exists(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::AlreadyExists, msg)
    }

    /// Create a forbidden error with the standard api_key message
    pub fn forbidden() -> Self {
        Self::new(ErrorCode::PermissionDenied)
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }
}

/// Application-level Result type
pub type AppResult<T> = Result<T, AppError>;

/// `{"error": {<kind>: <message>}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: BTreeMap<String, String>,
}

impl ErrorBody {
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: BTreeMap::from([(kind.into(), message.into())]),
        }
    }

    /// Body for an error as shown to clients
    ///
    /// System errors get their code's generic message; details stay in the logs.
    pub fn from_error(err: &AppError) -> Self {
        let message = if err.code.is_system() {
            err.code.message().to_string()
        } else {
            err.message.clone()
        };
        Self::new(err.code.kind(), message)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;

        let status = self.http_status();
        let body = ErrorBody::from_error(&self);

        if self.code.is_system() {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        (status, Json(body)).into_response()
    }
}
