use config::{Config, File};
use polyglot_error::PGResult;
use serde::{self, Deserialize};
use std::{ops::Deref, sync::Arc, time::Duration};

use crate::constants::{DATA_DIR, ENV_PREFIX, SQLITE_MEMORY_PATH};

#[derive(Debug, Clone)]
pub struct Settings(Arc<Inner>);

impl Deref for Settings {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl Settings {
    pub fn new(config_path: String) -> PGResult<Self> {
        let builder = Config::builder()
            .add_source(File::with_name(config_path.as_str()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            );
        let inner: Inner = builder.build()?.try_deserialize()?;
        Ok(Self(Arc::new(inner)))
    }

    /// Build settings directly from an already assembled configuration tree.
    pub fn from_inner(inner: Inner) -> Self {
        Self(Arc::new(inner))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_inner(Inner::default())
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Inner {
    #[serde(default)]
    pub general: General,
    #[serde(default)]
    pub db: Db,
    #[serde(default)]
    pub cache: Cache,
}

#[derive(Debug, Clone, Deserialize)]
pub struct General {
    /// Console and file log level (`trace`, `debug`, `info`, `warn`, `error`).
    ///
    /// # Environment override
    /// - `PG__GENERAL__LOG_LEVEL=debug`
    #[serde(default = "General::log_level_default")]
    pub log_level: String,
    /// Whether to also write a daily rolling log file under `logs/`.
    #[serde(default = "General::log_to_file_default")]
    pub log_to_file: bool,
}

impl Default for General {
    fn default() -> Self {
        General {
            log_level: General::log_level_default(),
            log_to_file: General::log_to_file_default(),
        }
    }
}

impl General {
    fn log_level_default() -> String {
        "info".into()
    }

    fn log_to_file_default() -> bool {
        true
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Db {
    #[serde(default)]
    pub sqlite: Sqlite,
}

/// SQL database type enum
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SqlType {
    #[default]
    Sqlite,
}

/// PGDbConfig is a trait that defines the necessary methods for database configuration.
/// It includes methods to get the database file path and connection URL for SQLite.
pub trait PGDbConfig: Send + Sync {
    /// Returns the type of SQL database.
    fn db_type(&self) -> SqlType;

    /// Returns the database file path.
    fn db_path(&self) -> String;

    /// Generates a URL for the database connection.
    fn to_url(&self) -> String;

    /// Returns the directory containing the database file.
    fn db_dir(&self) -> String;
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sqlite {
    /// Database file name under `./data`, or `:memory:` for a private in-memory database
    #[serde(default = "Sqlite::path_default")]
    pub path: String,
    /// Connect timeout in milliseconds
    #[serde(default = "Sqlite::timeout_default")]
    pub timeout: u64,
    /// Idle connection timeout in milliseconds
    #[serde(default = "Sqlite::idle_timeout_default")]
    pub idle_timeout: u64,
    /// Maximum connection lifetime in milliseconds
    #[serde(default = "Sqlite::max_lifetime_default")]
    pub max_lifetime: u64,
    #[serde(default = "Sqlite::max_connections_default")]
    pub max_connections: u32,
    #[serde(default = "Sqlite::auto_create_default")]
    pub auto_create: bool,
}

impl Default for Sqlite {
    fn default() -> Self {
        Sqlite {
            path: Sqlite::path_default(),
            timeout: Sqlite::timeout_default(),
            idle_timeout: Sqlite::idle_timeout_default(),
            max_lifetime: Sqlite::max_lifetime_default(),
            max_connections: Sqlite::max_connections_default(),
            auto_create: Sqlite::auto_create_default(),
        }
    }
}

impl PGDbConfig for Sqlite {
    fn db_type(&self) -> SqlType {
        SqlType::Sqlite
    }

    fn db_path(&self) -> String {
        self.path.clone()
    }

    fn to_url(&self) -> String {
        if self.is_memory() {
            return "sqlite::memory:".into();
        }
        if self.auto_create {
            // mode=rwc creates the file when missing
            format!("sqlite:{}/{}?mode=rwc", DATA_DIR, self.path)
        } else {
            format!("sqlite:{}/{}", DATA_DIR, self.path)
        }
    }

    fn db_dir(&self) -> String {
        DATA_DIR.into()
    }
}

impl Sqlite {
    /// Whether this configuration selects an in-memory database.
    #[inline]
    pub fn is_memory(&self) -> bool {
        self.path == SQLITE_MEMORY_PATH
    }

    fn path_default() -> String {
        "polyglot.db".into()
    }

    fn timeout_default() -> u64 {
        5000
    }

    fn idle_timeout_default() -> u64 {
        60000
    }

    fn max_lifetime_default() -> u64 {
        1800000
    }

    fn max_connections_default() -> u32 {
        16
    }

    fn auto_create_default() -> bool {
        true
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Cache {
    #[serde(default)]
    pub r#type: CacheType, // only "moka"
    #[serde(default = "Cache::prefix_default")]
    pub prefix: String,
    #[serde(default = "Cache::delimiter_default")]
    pub delimiter: String,
    /// TTL applied to every lookup and translation cache entry, in seconds
    #[serde(default = "Cache::ttl_secs_default")]
    pub ttl_secs: u64,
    #[serde(default = "Cache::max_capacity_default")]
    pub max_capacity: u64,
}

impl Default for Cache {
    fn default() -> Self {
        Cache {
            r#type: Default::default(),
            prefix: Cache::prefix_default(),
            delimiter: Cache::delimiter_default(),
            ttl_secs: Cache::ttl_secs_default(),
            max_capacity: Cache::max_capacity_default(),
        }
    }
}

impl Cache {
    /// Entry TTL as a `Duration`.
    #[inline]
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    fn prefix_default() -> String {
        "pg".into()
    }

    fn delimiter_default() -> String {
        ":".into()
    }

    fn ttl_secs_default() -> u64 {
        3600
    }

    fn max_capacity_default() -> u64 {
        10_000
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CacheType {
    #[default]
    Moka,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.cache.ttl(), Duration::from_secs(3600));
        assert_eq!(settings.cache.r#type, CacheType::Moka);
        assert_eq!(settings.general.log_level, "info");
        assert_eq!(
            settings.db.sqlite.to_url(),
            "sqlite:./data/polyglot.db?mode=rwc"
        );
    }

    #[test]
    fn test_memory_url() {
        let sqlite = Sqlite {
            path: SQLITE_MEMORY_PATH.into(),
            ..Default::default()
        };
        assert!(sqlite.is_memory());
        assert_eq!(sqlite.to_url(), "sqlite::memory:");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let settings = Settings::new("./does-not-exist/polyglot.toml".into()).unwrap();
        assert_eq!(settings.cache.prefix, "pg");
        assert_eq!(settings.db.sqlite.path, "polyglot.db");
    }
}
