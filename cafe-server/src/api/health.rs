//! Health check route
//!
//! ```json
//! { "status": "ok", "version": "0.1.0", "cafes": 21 }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::repository::cafe;
use crate::utils::AppResult;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    /// Rows in the cafe table; doubles as a database round-trip
    cafes: i64,
}

async fn health(State(state): State<ServerState>) -> AppResult<Json<HealthResponse>> {
    let cafes = cafe::count(state.pool()).await?;
    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        cafes,
    }))
}
