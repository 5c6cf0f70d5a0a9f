use std::path::PathBuf;

/// Default shared secret for write/delete endpoints
pub const DEFAULT_API_KEY: &str = "TopSecretAPIKey";

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | . | Base directory for the default database file |
/// | DATABASE_PATH | {WORK_DIR}/cafes.db | SQLite file |
/// | HTTP_PORT | 5000 | HTTP listen port |
/// | API_KEY | TopSecretAPIKey | Shared secret for /add and /report-closed |
/// | ENVIRONMENT | development | development \| production |
/// | LOG_LEVEL | info | Default filter when RUST_LOG is unset |
/// | LOG_DIR | (unset) | Enables daily rolling log files |
///
/// # Example
///
/// ```ignore
/// HTTP_PORT=8080 API_KEY=s3cret cargo run -p cafe-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file
    pub database_path: PathBuf,
    /// HTTP API port
    pub http_port: u16,
    /// Shared secret checked by the access gate
    pub api_key: String,
    /// Runtime environment: development | production
    pub environment: String,
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
    /// Directory for rolling log files
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Unset or unparsable variables fall back to defaults.
    pub fn from_env() -> Self {
        let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| ".".into());
        let database_path = std::env::var("DATABASE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(&work_dir).join("cafes.db"));

        Self {
            database_path,
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            api_key: std::env::var("API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
        }
    }

    /// Override the parts tests care about
    pub fn with_overrides(
        database_path: impl Into<PathBuf>,
        http_port: u16,
        api_key: impl Into<String>,
    ) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config.api_key = api_key.into();
        config
    }

    /// Is this a production environment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Is the shared secret still the built-in default
    pub fn uses_default_api_key(&self) -> bool {
        self.api_key == DEFAULT_API_KEY
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
