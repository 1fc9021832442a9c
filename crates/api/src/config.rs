use catalog_db::ConfigError;

/// HTTP server configuration loaded from environment variables.
///
/// Database settings live in [`catalog_db::DbConfig`]; this only covers the
/// listener and request handling.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8501`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default   |
    /// |------------------------|-----------|
    /// | `HOST`                 | `0.0.0.0` |
    /// | `PORT`                 | `8501`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value })?,
            None => 8501,
        };

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(value) => value.parse::<u64>().map_err(|_| ConfigError::Invalid {
                var: "REQUEST_TIMEOUT_SECS",
                value,
            })?,
            None => 30,
        };

        Ok(Self {
            host,
            port,
            request_timeout_secs,
        })
    }
}
