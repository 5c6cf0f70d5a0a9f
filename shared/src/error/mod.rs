//! Unified error system
//!
//! - [`ErrorCode`]: standardized error codes
//! - [`AppError`]: error type carrying a code and a message
//! - [`ErrorBody`]: the `{"error": {<kind>: <message>}}` wire shape
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 2xxx: Permission errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorBody, ErrorCode};
//!
//! let err = AppError::not_found("Sorry a cafe with that id was not found in the database.");
//! assert_eq!(err.code, ErrorCode::NotFound);
//!
//! let body = ErrorBody::from_error(&err);
//! assert!(body.error.contains_key("Not Found"));
//! ```

mod codes;
mod http;
mod types;

pub use codes::ErrorCode;
pub use types::{AppError, AppResult, ErrorBody};
