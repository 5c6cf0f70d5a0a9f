//! Shared types for the café directory
//!
//! Data models, the error system and small string utilities used by the
//! server crate and by anything that talks to its HTTP API.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use models::{Cafe, CafeCreate, CafeForm};
