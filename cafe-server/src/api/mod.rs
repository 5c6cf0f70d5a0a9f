//! API routes
//!
//! - [`home`] - landing page
//! - [`cafes`] - cafe directory endpoints
//! - [`health`] - health check

pub mod cafes;
pub mod health;
pub mod home;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
