mod cache;
mod migration;
mod sql;

pub use crate::cache::moka::MokaCache;
pub use migration::Migrator;

use async_trait::async_trait;
use migration::MigratorTrait;
use polyglot_error::{
    init::InitContextError,
    storage::{CacheError, StorageError},
    PGResult,
};
use polyglot_models::{
    cache::PGBaseCache,
    constants::LOOKUP_CACHE_NAME,
    settings::{CacheType, Settings},
    CacheProvider, DbManager,
};
use sea_orm::DatabaseConnection;
use sql::sqlite;
use std::{any::Any, collections::HashMap, sync::Arc, time::Duration};
use tracing::{info, instrument};

/// Database manager owning the SQLite connection pool
pub struct PGDbManager {
    db_conn: Option<DatabaseConnection>,
}

impl PGDbManager {
    /// Apply pending migrations on an existing connection.
    pub async fn migrate(db: &DatabaseConnection) -> PGResult<()> {
        Migrator::up(db, None).await?;
        Ok(())
    }
}

#[async_trait]
impl DbManager for PGDbManager {
    #[inline]
    #[instrument(name = "init-db-manager", skip_all)]
    async fn init(settings: &Settings) -> PGResult<Arc<Self>, InitContextError> {
        let db_conn = {
            let db = sqlite::init_db(&settings.db.sqlite).await.map_err(|e| {
                InitContextError::Primitive(format!("Failed to init SQLite database: {e}"))
            })?;

            Migrator::up(&db, None).await.map_err(|e| {
                InitContextError::Primitive(format!("Failed to migrate SQLite database: {e}"))
            })?;

            db
        };

        let db_manager = Arc::new(PGDbManager {
            db_conn: Some(db_conn),
        });

        info!("Database manager initialized successfully");
        Ok(db_manager)
    }

    #[inline]
    fn get_connection(&self) -> PGResult<DatabaseConnection, StorageError> {
        self.db_conn
            .as_ref()
            .ok_or(StorageError::StorageUnavailable)
            .cloned()
    }

    #[inline]
    #[instrument(name = "db_close", skip_all)]
    async fn close(&self) -> PGResult<()> {
        info!("Closing database connections...");
        if let Some(db) = &self.db_conn {
            db.clone().close().await?;
        }
        info!("Database connections closed successfully");
        Ok(())
    }
}

/// Owns the named caches, keyed by name and erased over their value type
#[derive(Debug)]
pub struct PGCacheProvider {
    prefix: String,
    delimiter: String,
    cache_type: CacheType,
    caches: HashMap<String, Arc<dyn Any + Send + Sync>>,
}

impl PGCacheProvider {
    pub fn new(prefix: &str, delimiter: &str, cache_type: CacheType) -> Self {
        Self {
            prefix: prefix.into(),
            delimiter: delimiter.into(),
            cache_type,
            caches: HashMap::new(),
        }
    }

    #[inline]
    #[instrument(name = "init-caches", skip_all)]
    fn init_caches(&mut self, settings: &Settings) -> PGResult<(), CacheError> {
        self.create_cache::<Vec<u8>>(
            LOOKUP_CACHE_NAME,
            Some(settings.cache.max_capacity),
            Some(settings.cache.ttl()),
        )
    }
}

#[async_trait]
impl CacheProvider for PGCacheProvider {
    #[inline]
    #[instrument(name = "init-cache-provider", skip(settings))]
    async fn init(settings: &Settings) -> PGResult<Arc<Self>, InitContextError> {
        let mut provider = Self::new(
            &settings.cache.prefix,
            &settings.cache.delimiter,
            settings.cache.r#type,
        );
        provider.init_caches(settings).map_err(|e| {
            InitContextError::Primitive(format!("Failed to initialize caches: {e}"))
        })?;
        Ok(Arc::new(provider))
    }

    #[inline]
    #[instrument(name = "create-cache", skip(self))]
    fn create_cache<V: Clone + Send + Sync + 'static>(
        &mut self,
        cache_name: &str,
        max_capacity: Option<u64>,
        ttl: Option<Duration>,
    ) -> PGResult<(), CacheError> {
        if self.caches.contains_key(cache_name) {
            return Err(CacheError::AlreadyExists(cache_name.to_string()));
        }

        let full_prefix = format!("{}{}{}", self.prefix, self.delimiter, cache_name);
        let cache = match self.cache_type {
            CacheType::Moka => {
                MokaCache::<V>::new(cache_name.to_string(), full_prefix, max_capacity, ttl)
            }
        };
        let cache: Arc<dyn PGBaseCache<Value = V> + Send + Sync> = Arc::new(cache);
        self.caches.insert(cache_name.to_string(), Arc::new(cache));
        info!("Cache created successfully: {}", cache_name);
        Ok(())
    }

    #[inline]
    fn get_cache<V>(
        &self,
        cache_name: &str,
    ) -> PGResult<Arc<dyn PGBaseCache<Value = V> + Send + Sync>, CacheError>
    where
        V: Clone + Send + Sync + 'static,
    {
        self.caches
            .get(cache_name)
            .and_then(|cache| {
                cache
                    .downcast_ref::<Arc<dyn PGBaseCache<Value = V> + Send + Sync>>()
                    .map(Arc::clone)
            })
            .ok_or(CacheError::NotFound(cache_name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_provider_creates_lookup_cache() {
        let provider = PGCacheProvider::init(&Settings::default()).await.unwrap();
        let cache = provider.get_cache::<Vec<u8>>(LOOKUP_CACHE_NAME).unwrap();
        assert_eq!(cache.name(), LOOKUP_CACHE_NAME);

        // Wrong value type is reported as missing
        assert!(provider.get_cache::<String>(LOOKUP_CACHE_NAME).is_err());
    }

    #[test]
    fn test_duplicate_cache_is_rejected() {
        let mut provider = PGCacheProvider::new("pg", ":", CacheType::Moka);
        provider
            .create_cache::<Vec<u8>>("a", None, None)
            .unwrap();
        assert!(matches!(
            provider.create_cache::<Vec<u8>>("a", None, None),
            Err(CacheError::AlreadyExists(_))
        ));
    }
}
