//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::NotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists => StatusCode::CONFLICT,

            // 403 Forbidden
            Self::PermissionDenied => StatusCode::FORBIDDEN,

            // 500 Internal Server Error
            Self::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request
            Self::ValidationFailed | Self::RequiredField => StatusCode::BAD_REQUEST,
        }
    }

    /// Key used inside the `{"error": {<kind>: <message>}}` body
    ///
    /// This is the canonical reason phrase of the mapped status.
    pub fn kind(&self) -> &'static str {
        self.http_status().canonical_reason().unwrap_or("Error")
    }
}
