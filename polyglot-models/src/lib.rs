pub mod cache;
pub mod constants;
pub mod domain;
pub mod entities;
pub mod enums;
mod idens;
pub mod initializer;
pub mod settings;

use crate::cache::PGBaseCache;
use async_trait::async_trait;
use polyglot_error::{
    init::InitContextError,
    storage::{CacheError, StorageError},
    PGResult,
};
use sea_orm::DatabaseConnection;
use settings::Settings;
use std::{sync::Arc, time::Duration};

/// Database management interface.
///
/// This trait defines the core database operations including initialization,
/// connection management, and cleanup.
#[async_trait]
pub trait DbManager: Send + Sync + 'static {
    /// Initializes the database manager with the provided settings.
    ///
    /// # Arguments
    /// * `settings` - The platform configuration settings
    ///
    /// # Returns
    /// An Arc-wrapped instance of the database manager
    async fn init(settings: &Settings) -> PGResult<Arc<Self>, InitContextError>
    where
        Self: Sized;

    /// Retrieves a database connection from the connection pool.
    ///
    /// # Returns
    /// A SeaORM database connection or an error if the connection cannot be established
    fn get_connection(&self) -> PGResult<DatabaseConnection, StorageError>;

    /// Gracefully closes all database connections and performs cleanup.
    async fn close(&self) -> PGResult<()>;
}

/// Cache provider interface.
///
/// Owns the named caches used by the services, supporting different
/// cache value types and implementations.
#[async_trait]
pub trait CacheProvider: Send + Sync + 'static {
    /// Initializes the cache provider with the provided configuration.
    ///
    /// # Arguments
    /// * `settings` - The platform configuration settings
    ///
    /// # Returns
    /// An Arc-wrapped instance of the cache provider
    async fn init(settings: &Settings) -> PGResult<Arc<Self>, InitContextError>
    where
        Self: Sized;

    /// Create a cache instance for a specific value type.
    ///
    /// # Arguments
    /// * `cache_name` - The name of the cache
    /// * `max_capacity` - The maximum capacity of the cache
    /// * `ttl` - The default time to live of the cache entries
    fn create_cache<V>(
        &mut self,
        cache_name: &str,
        max_capacity: Option<u64>,
        ttl: Option<Duration>,
    ) -> PGResult<(), CacheError>
    where
        Self: Sized,
        V: Clone + Send + Sync + 'static;

    /// Retrieves a cache instance for a specific value type.
    ///
    /// # Returns
    /// A type-specific cache implementation wrapped in Arc
    fn get_cache<V>(
        &self,
        cache_name: &str,
    ) -> PGResult<Arc<dyn PGBaseCache<Value = V> + Send + Sync>, CacheError>
    where
        Self: Sized,
        V: Clone + Send + Sync + 'static;
}
