//! Cafe API module
//!
//! | Path | Method | Gate |
//! |------|--------|------|
//! | /all | GET | - |
//! | /random | GET | - |
//! | /search?loc= | GET | - |
//! | /add?api_key= | POST (form) | api_key |
//! | /update_price/{cafe_id}?new_price= | PATCH | - |
//! | /report-closed/{cafe_id}?api_key= | DELETE | api_key (after existence) |

mod form;
mod handler;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/all", get(handler::list))
        .route("/random", get(handler::random))
        .route("/search", get(handler::search))
        .route("/add", post(handler::create))
        .route("/update_price/{cafe_id}", patch(handler::update_price))
        .route("/report-closed/{cafe_id}", delete(handler::delete))
}
