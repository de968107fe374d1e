use async_trait::async_trait;
use polyglot_error::StorageResult;
use std::{sync::Arc, time::Duration};

/// Base cache trait that defines common cache operations.
///
/// Every call reports an explicit outcome. Callers treat the cache as advisory:
/// an `Err` here must never fail the caller's primary operation.
#[async_trait]
pub trait PGBaseCache: Send + Sync + 'static {
    /// Associated value type that can be cached
    type Value: Clone + Send + Sync + 'static;

    /// Get cache name
    fn name(&self) -> &str;

    /// Get value by key
    async fn get(&self, key: String) -> StorageResult<Option<Self::Value>>;

    /// Set value with the cache's default TTL
    async fn set(&self, key: String, value: Self::Value) -> StorageResult<()>;

    /// Set value with custom TTL
    async fn set_with_ttl(
        &self,
        key: String,
        value: Self::Value,
        ttl: Duration,
    ) -> StorageResult<()>;

    /// Delete key, returning whether it existed
    async fn delete(&self, key: String) -> StorageResult<bool>;

    /// Delete all keys of this cache
    async fn delete_all(&self) -> StorageResult<u64>;

    /// Delete multiple keys
    async fn delete_by_keys(&self, keys: Vec<String>) -> StorageResult<u64>;

    /// Check if key exists
    async fn exists(&self, key: String) -> StorageResult<bool>;
}

#[async_trait]
impl<T: PGBaseCache + ?Sized> PGBaseCache for Arc<T> {
    type Value = T::Value;

    fn name(&self) -> &str {
        (**self).name()
    }

    async fn get(&self, key: String) -> StorageResult<Option<Self::Value>> {
        (**self).get(key).await
    }

    async fn set(&self, key: String, value: Self::Value) -> StorageResult<()> {
        (**self).set(key, value).await
    }

    async fn set_with_ttl(
        &self,
        key: String,
        value: Self::Value,
        ttl: Duration,
    ) -> StorageResult<()> {
        (**self).set_with_ttl(key, value, ttl).await
    }

    async fn delete(&self, key: String) -> StorageResult<bool> {
        (**self).delete(key).await
    }

    async fn delete_all(&self) -> StorageResult<u64> {
        (**self).delete_all().await
    }

    async fn delete_by_keys(&self, keys: Vec<String>) -> StorageResult<u64> {
        (**self).delete_by_keys(keys).await
    }

    async fn exists(&self, key: String) -> StorageResult<bool> {
        (**self).exists(key).await
    }
}

/// Byte-oriented cache used by the lookup domains; payloads are JSON.
pub type LookupCache = Arc<dyn PGBaseCache<Value = Vec<u8>> + Send + Sync>;
