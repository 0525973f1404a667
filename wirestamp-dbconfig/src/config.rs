//! Connection settings for the supported database engines.
//!
//! Field names on the wire are PascalCase (`Address`, `MaxOpen`, `MySQL`) and
//! pool durations are integer nanoseconds, so the JSON matches what sibling
//! Go services emit for the same structures. TOML input may also spell
//! durations as `"5m"`.

use crate::error::{ConfigError, ConfigResult};
use crate::mask;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};

/// Top-level database settings. At most one backend is used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// MySQL server settings. Preferred when both backends are present.
    #[serde(rename = "MySQL", default)]
    pub mysql: Option<MySqlConfig>,
    /// Embedded SQLite settings.
    #[serde(rename = "SQLite", default)]
    pub sqlite: Option<SqliteConfig>,
    /// Schema (MySQL) or logical database name.
    #[serde(rename = "DatabaseName", default)]
    pub database_name: String,
}

/// The backend selected by [`DatabaseConfig::backend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend<'a> {
    /// Connect to a MySQL server.
    MySql(&'a MySqlConfig),
    /// Open an SQLite file.
    Sqlite(&'a SqliteConfig),
}

impl Backend<'_> {
    /// Short engine name for logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::MySql(_) => "mysql",
            Self::Sqlite(_) => "sqlite",
        }
    }
}

impl DatabaseConfig {
    /// Loads settings from a TOML file.
    pub fn load_from(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        info!(
            path = %path.display(),
            mysql = config.mysql.is_some(),
            sqlite = config.sqlite.is_some(),
            "Loaded database config"
        );
        Ok(config)
    }

    /// Parses settings from a TOML document.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Picks the backend to connect to. MySQL takes precedence over SQLite.
    pub fn backend(&self) -> ConfigResult<Backend<'_>> {
        match (&self.mysql, &self.sqlite) {
            (Some(mysql), sqlite) => {
                if sqlite.is_some() {
                    warn!("Both MySQL and SQLite are configured, using MySQL");
                }
                Ok(Backend::MySql(mysql))
            }
            (None, Some(sqlite)) => Ok(Backend::Sqlite(sqlite)),
            (None, None) => Err(ConfigError::NoBackend),
        }
    }

    /// Pretty JSON with every credential masked.
    pub fn to_masked_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Settings for a MySQL server.
///
/// `Deserialize` reads the plaintext password; `Serialize` and `Debug` never
/// emit it.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MySqlConfig {
    /// Server address, e.g. `tcp(db.internal:3306)`.
    pub address: String,
    /// Login user.
    pub user: String,
    /// Plaintext password. Never serialized as-is.
    pub password: String,
    /// Pool sizing; all zero when omitted.
    #[serde(default)]
    pub connections: ConnectionsConfig,
}

impl MySqlConfig {
    /// Returns a serializable copy whose password went through `mask`.
    pub fn masked_with<F>(&self, mask: F) -> MaskedMySqlConfig<'_>
    where
        F: FnOnce(&str) -> String,
    {
        MaskedMySqlConfig {
            address: &self.address,
            user: &self.user,
            password: mask(&self.password),
            connections: &self.connections,
        }
    }
}

impl Serialize for MySqlConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.masked_with(mask::password).serialize(serializer)
    }
}

impl fmt::Debug for MySqlConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MySqlConfig")
            .field("address", &self.address)
            .field("user", &self.user)
            .field("password", &mask::password(&self.password))
            .field("connections", &self.connections)
            .finish()
    }
}

/// [`MySqlConfig`] as emitted, with the password already masked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MaskedMySqlConfig<'a> {
    /// Borrowed from the source config.
    pub address: &'a str,
    /// Borrowed from the source config.
    pub user: &'a str,
    /// Output of the masker.
    pub password: String,
    /// Borrowed from the source config.
    pub connections: &'a ConnectionsConfig,
}

/// Settings for an embedded SQLite database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SqliteConfig {
    /// Location of the database file.
    pub path: PathBuf,
}

/// Connection pool sizing. Zero means the driver default (unlimited).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConnectionsConfig {
    /// Upper bound on open connections.
    pub max_open: u32,
    /// Upper bound on idle connections kept in the pool.
    pub max_idle: u32,
    /// Maximum age of a connection before it is recycled.
    #[serde(with = "crate::duration")]
    pub max_lifetime: Duration,
    /// Maximum time a connection may sit idle.
    #[serde(with = "crate::duration")]
    pub max_idle_time: Duration,
}
