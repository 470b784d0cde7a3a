use std::path::PathBuf;

use folio_db::store::{StoreBackend, UnknownBackend};

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Persistence strategy for projects and messages (default: `sqlite`).
    pub store_backend: StoreBackend,
    /// Directory holding the JSON documents and uploaded images (default: `data`).
    pub data_dir: PathBuf,
    /// SQLite database URL (default: `sqlite://portfolio.db`).
    pub database_url: String,
    /// Directory served under `/static` (default: `static`).
    pub static_dir: PathBuf,
    /// Largest accepted request body in bytes (default: 10 MiB).
    pub max_upload_bytes: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },

    #[error("STORE_BACKEND: {0}")]
    Backend(#[from] UnknownBackend),
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STORE_BACKEND`        | `sqlite`                   |
    /// | `DATA_DIR`             | `data`                     |
    /// | `DATABASE_URL`         | `sqlite://portfolio.db`    |
    /// | `STATIC_DIR`           | `static`                   |
    /// | `MAX_UPLOAD_BYTES`     | `10485760`                 |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");

        let port = parse_var("PORT", var("PORT", "3000"), "a valid port number")?;

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs = parse_var(
            "REQUEST_TIMEOUT_SECS",
            var("REQUEST_TIMEOUT_SECS", "30"),
            "a whole number of seconds",
        )?;

        let store_backend: StoreBackend = var("STORE_BACKEND", "sqlite").parse()?;

        let max_upload_bytes = parse_var(
            "MAX_UPLOAD_BYTES",
            var("MAX_UPLOAD_BYTES", "10485760"),
            "a byte count",
        )?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            store_backend,
            data_dir: PathBuf::from(var("DATA_DIR", "data")),
            database_url: var("DATABASE_URL", "sqlite://portfolio.db"),
            static_dir: PathBuf::from(var("STATIC_DIR", "static")),
            max_upload_bytes,
        })
    }

    /// Where uploaded project images live when stored as files.
    pub fn upload_dir(&self) -> PathBuf {
        self.data_dir.join("uploads")
    }
}

fn parse_var<T: std::str::FromStr>(
    var: &'static str,
    value: String,
    expected: &'static str,
) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid {
            var,
            expected,
            value,
        })
}
