//! Database connection configuration.

use serde::{Deserialize, Serialize};

/// Configuration for opening the shared database connection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[non_exhaustive]
pub struct DbConfig {
    /// Database server host. An IP literal avoids a DNS lookup on connect.
    pub host: String,

    /// Database server port.
    pub port: u16,

    /// Name of the database to open.
    pub database: String,

    /// Username to authenticate as.
    pub username: String,

    /// Password to authenticate with. Never included in the DSN or logs.
    pub password: String,
}

impl DbConfig {
    /// Create a config with the stock local-development defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            host: "127.0.0.1".to_owned(),
            port: 3306,
            database: "guestbook".to_owned(),
            username: "root".to_owned(),
            password: String::new(),
        }
    }

    /// Build a config from `GUESTBOOK_DB_*` environment variables, falling
    /// back to the defaults of [`DbConfig::new`] for anything unset.
    ///
    /// Recognised variables: `GUESTBOOK_DB_HOST`, `GUESTBOOK_DB_PORT`,
    /// `GUESTBOOK_DB_NAME`, `GUESTBOOK_DB_USER`, `GUESTBOOK_DB_PASSWORD`.
    /// An unparsable port is ignored with a warning.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::new();
        if let Ok(host) = std::env::var("GUESTBOOK_DB_HOST") {
            config.host = host;
        }
        if let Ok(port) = std::env::var("GUESTBOOK_DB_PORT") {
            match port.parse() {
                Ok(port) => config.port = port,
                Err(e) => {
                    tracing::warn!(value = %port, error = %e, "ignoring invalid GUESTBOOK_DB_PORT");
                }
            }
        }
        if let Ok(database) = std::env::var("GUESTBOOK_DB_NAME") {
            config.database = database;
        }
        if let Ok(username) = std::env::var("GUESTBOOK_DB_USER") {
            config.username = username;
        }
        if let Ok(password) = std::env::var("GUESTBOOK_DB_PASSWORD") {
            config.password = password;
        }
        config
    }

    /// Render the DSN the connection is opened with.
    ///
    /// The password is deliberately omitted so the DSN is safe to log.
    #[must_use]
    pub fn dsn(&self) -> String {
        format!(
            "mysql://{}@{}:{}/{}",
            self.username, self.host, self.port, self.database
        )
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self::new()
    }
}
