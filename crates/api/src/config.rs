/// Sequential model calls one suggestion request can make (classify, then match).
pub const MODEL_CALLS_PER_REQUEST: u64 = 2;

/// Server configuration loaded from environment variables.
///
/// All fields except `database_url` have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `150`). Covers the full
    /// classify-then-match chain, see [`ServerConfig::covers_model_calls`].
    pub request_timeout_secs: u64,
    /// Grace period for in-flight requests after a shutdown signal.
    pub shutdown_timeout_secs: u64,
    /// Maximum request body size in bytes (default: 16 MiB, enough for a
    /// 10 MB media payload after base64 expansion).
    pub body_limit_bytes: usize,
    /// Postgres connection string.
    pub database_url: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                    |
    /// |-------------------------|----------------------------|
    /// | `HOST`                  | `0.0.0.0`                  |
    /// | `PORT`                  | `3000`                     |
    /// | `CORS_ORIGINS`          | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS`  | `150`                      |
    /// | `SHUTDOWN_TIMEOUT_SECS` | `30`                       |
    /// | `BODY_LIMIT_BYTES`      | `16777216`                 |
    /// | `DATABASE_URL`          | (required)                 |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "150".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let body_limit_bytes: usize = std::env::var("BODY_LIMIT_BYTES")
            .unwrap_or_else(|_| (16 * 1024 * 1024).to_string())
            .parse()
            .expect("BODY_LIMIT_BYTES must be a valid usize");

        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            body_limit_bytes,
            database_url,
        }
    }

    /// Whether the request timeout leaves room for every model call a
    /// request can chain, each bounded by `model_timeout_secs`.
    pub fn covers_model_calls(&self, model_timeout_secs: u64) -> bool {
        self.request_timeout_secs >= model_timeout_secs.saturating_mul(MODEL_CALLS_PER_REQUEST)
    }
}
