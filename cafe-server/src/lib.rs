//! Cafe Server - café directory REST API
//!
//! A small HTTP service over one SQLite table of cafés: list, random pick,
//! location search, and API-key gated add/delete plus a price update.
//!
//! # Module layout
//!
//! ```text
//! cafe-server/src/
//! ├── core/          # config, state, server, errors
//! ├── auth/          # API key gate
//! ├── api/           # HTTP handlers
//! ├── routes/        # router assembly and tower layers
//! ├── middleware/    # request logging
//! ├── db/            # SQLite pool, schema, repository
//! └── utils/         # logger, error re-exports
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod middleware;
pub mod routes;
pub mod utils;

pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

pub use utils::logger::init_logger;

// Security logging macro - events land in the `security` log target
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

/// Load `.env`, read [`Config`] and install the logger
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger(
        &config.log_level,
        config.is_production(),
        config.log_dir.as_deref(),
    )?;

    Ok(config)
}
