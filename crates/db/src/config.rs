use std::str::FromStr;

use sqlx::postgres::PgConnectOptions;

/// Default PostgreSQL port.
const DEFAULT_PORT: u16 = 5432;

/// Default pool size.
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Database connection settings loaded from environment variables.
///
/// The connection is assembled from discrete credential fields. A full
/// `DATABASE_URL` takes precedence when present.
#[derive(Clone)]
pub struct DbConfig {
    /// Full connection URL; overrides every discrete field when set.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
    /// Maximum number of pooled connections.
    pub max_connections: u32,
}

impl DbConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default           |
    /// |----------------------------|-------------------|
    /// | `DATABASE_URL`             | unset             |
    /// | `DATABASE_HOST`            | `localhost`       |
    /// | `DATABASE_PORT`            | `5432`            |
    /// | `DATABASE_USER_NAME`       | `postgres`        |
    /// | `DATABASE_USER_PASSWORD`   | empty             |
    /// | `DATABASE_NAME`            | `makeup_calendar` |
    /// | `DATABASE_MAX_CONNECTIONS` | `10`              |
    pub fn from_env() -> Self {
        let port: u16 = std::env::var("DATABASE_PORT")
            .map(|p| p.parse().expect("DATABASE_PORT must be a valid u16"))
            .unwrap_or(DEFAULT_PORT);

        let max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
            .map(|n| {
                n.parse()
                    .expect("DATABASE_MAX_CONNECTIONS must be a valid u32")
            })
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        Self {
            url: std::env::var("DATABASE_URL").ok().filter(|u| !u.is_empty()),
            host: std::env::var("DATABASE_HOST").unwrap_or_else(|_| "localhost".into()),
            port,
            username: std::env::var("DATABASE_USER_NAME").unwrap_or_else(|_| "postgres".into()),
            password: std::env::var("DATABASE_USER_PASSWORD").unwrap_or_default(),
            database: std::env::var("DATABASE_NAME")
                .unwrap_or_else(|_| "makeup_calendar".into()),
            max_connections,
        }
    }

    /// Build sqlx connect options from this configuration.
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        if let Some(url) = &self.url {
            return PgConnectOptions::from_str(url);
        }

        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.database))
    }
}

impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DbConfig")
            .field("url", &self.url.as_ref().map(|_| "<redacted>"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}
