use sqlx::SqlitePool;

use crate::auth::ApiKeyGate;
use crate::core::{Config, Result};
use crate::db::DbService;

/// Server state - shared by every handler through axum `State`
///
/// Cheap to clone: the pool and the gate are reference-counted.
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | configuration (immutable) |
/// | db | DbService | SQLite pool |
/// | gate | ApiKeyGate | shared-secret check for writes |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
    pub gate: ApiKeyGate,
}

impl ServerState {
    /// Assemble state from parts; usually [`initialize`](Self::initialize) instead
    pub fn new(config: Config, db: DbService, gate: ApiKeyGate) -> Self {
        Self { config, db, gate }
    }

    /// Open the database at `config.database_path` and build the gate
    pub async fn initialize(config: &Config) -> Result<Self> {
        let db = DbService::new(&config.database_path).await?;
        let gate = ApiKeyGate::new(config.api_key.clone());

        if config.uses_default_api_key() {
            if config.is_production() {
                tracing::warn!("API_KEY is the built-in default in production; set API_KEY");
            } else {
                tracing::info!("Using the default API key");
            }
        }

        Ok(Self::new(config.clone(), db, gate))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.db.pool
    }
}
