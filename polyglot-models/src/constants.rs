// Constants shared across the polyglot crates

/// The default configuration file name for the application.
/// This constant is used to specify the default configuration file
/// that the application will attempt to load at startup.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "polyglot.toml";

/// Environment variable prefix for configuration overrides (`PG__DB__SQLITE__PATH=...`).
pub const ENV_PREFIX: &str = "PG";

pub const DATA_DIR: &str = "./data";
pub const LOG_DIR: &str = "logs";
pub const LOG_FILE_NAME: &str = "polyglot.log";

/// SQLite path that selects a private in-memory database.
pub const SQLITE_MEMORY_PATH: &str = ":memory:";

/// Name of the byte cache shared by every lookup domain.
pub const LOOKUP_CACHE_NAME: &str = "Lookup";

/// Cache key of the category lookup domain.
pub const CATEGORIES_LOOKUP_CACHE_KEY: &str = "categories:lookup";
/// Cache key segment used when a territory lookup is not narrowed by type.
pub const ALL_TERRITORY_TYPES: &str = "all";
