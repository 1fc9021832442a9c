use std::fmt;

use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Default PostgreSQL port when `DB_PORT` is unset.
pub const DEFAULT_DB_PORT: u16 = 5432;

/// Default pool size when `DB_MAX_CONNECTIONS` is unset.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} has an invalid value: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Connection parameters for the catalog database.
///
/// Built once at startup and handed to [`crate::create_pool`]; nothing in the
/// storage layer reads the environment after that.
#[derive(Clone)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
    pub max_connections: u32,
}

impl DbConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var              | Default  |
    /// |----------------------|----------|
    /// | `DB_HOST`            | required |
    /// | `DB_NAME`            | required |
    /// | `DB_USER`            | required |
    /// | `DB_PASSWORD`        | required |
    /// | `DB_PORT`            | `5432`   |
    /// | `DB_MAX_CONNECTIONS` | `5`      |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| lookup(var).ok_or(ConfigError::Missing(var));

        let port = match lookup("DB_PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "DB_PORT", value })?,
            None => DEFAULT_DB_PORT,
        };

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(value) => match value.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "DB_MAX_CONNECTIONS",
                        value,
                    })
                }
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        Ok(Self {
            host: required("DB_HOST")?,
            port,
            database: required("DB_NAME")?,
            username: required("DB_USER")?,
            password: required("DB_PASSWORD")?,
            max_connections,
        })
    }

    /// Connection options with TLS required. Plaintext is never negotiated.
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.username)
            .password(&self.password)
            .ssl_mode(PgSslMode::Require)
    }
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("max_connections", &self.max_connections)
            .finish()
    }
}
