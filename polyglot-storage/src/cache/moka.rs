use async_trait::async_trait;
use moka::{
    future::{Cache as MokaInner, CacheBuilder},
    Expiry,
};
use polyglot_error::{storage::CacheError, StorageResult};
use polyglot_models::cache::PGBaseCache;
use std::time::{Duration, Instant};

// The cached item with per-entry expiration metadata.
#[derive(Clone)]
pub struct CacheItem<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub value: V,
    pub ttl: Option<Duration>, // Fixed TTL
}

/// Moka-based in-memory cache implementation.
pub struct MokaCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    /// Logical cache name
    name: String,
    /// Key prefix, `{prefix}{delimiter}{cache name}`
    prefix: String,
    inner: MokaInner<String, CacheItem<V>>,
}

// Custom Expiry that maps item metadata to a remaining duration per entry.
pub struct MokaExpiry {
    ttl: Option<Duration>,
}

impl<K, V> Expiry<K, CacheItem<V>> for MokaExpiry
where
    V: Clone + Send + Sync + 'static,
{
    fn expire_after_create(&self, _key: &K, item: &CacheItem<V>, _: Instant) -> Option<Duration> {
        item.ttl.or(self.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &K,
        item: &CacheItem<V>,
        _: Instant,
        _current: Option<Duration>,
    ) -> Option<Duration> {
        item.ttl.or(self.ttl)
    }
}

impl<V> MokaCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    pub fn new(
        name: String,
        prefix: String,
        max_capacity: Option<u64>,
        ttl: Option<Duration>,
    ) -> Self {
        let mut builder = CacheBuilder::default().expire_after(MokaExpiry { ttl });
        if let Some(max_capacity) = max_capacity {
            builder = builder.max_capacity(max_capacity);
        }
        let inner = builder.build();

        Self {
            name,
            prefix,
            inner,
        }
    }

    /// Build full key with prefix.
    #[inline]
    fn get_full_key(&self, key: String) -> String {
        if self.prefix.is_empty() {
            key
        } else {
            format!("{}:{key}", self.prefix)
        }
    }
}

#[async_trait]
impl<V> PGBaseCache for MokaCache<V>
where
    V: Clone + Send + Sync + 'static,
{
    type Value = V;

    #[inline]
    fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    async fn get(&self, key: String) -> StorageResult<Option<Self::Value>> {
        let full_key = self.get_full_key(key);
        let value = self.inner.get(&full_key).await;
        Ok(value.map(|item| item.value))
    }

    #[inline]
    async fn set(&self, key: String, value: Self::Value) -> StorageResult<()> {
        let full_key = self.get_full_key(key);
        self.inner
            .insert(full_key, CacheItem { value, ttl: None })
            .await;
        Ok(())
    }

    #[inline]
    async fn set_with_ttl(
        &self,
        key: String,
        value: Self::Value,
        ttl: Duration,
    ) -> StorageResult<()> {
        if ttl.is_zero() {
            return Err(CacheError::TTLExpired("ttl must be > 0".into()).into());
        }
        let full_key = self.get_full_key(key);
        self.inner
            .insert(
                full_key,
                CacheItem {
                    value,
                    ttl: Some(ttl),
                },
            )
            .await;
        Ok(())
    }

    #[inline]
    async fn delete(&self, key: String) -> StorageResult<bool> {
        let full_key = self.get_full_key(key);
        Ok(self.inner.remove(&full_key).await.is_some())
    }

    #[inline]
    async fn delete_all(&self) -> StorageResult<u64> {
        let count = self.inner.entry_count();
        self.inner.invalidate_all();
        Ok(count)
    }

    #[inline]
    async fn delete_by_keys(&self, keys: Vec<String>) -> StorageResult<u64> {
        let mut deleted: u64 = 0;
        for key in keys {
            let full_key = self.get_full_key(key);
            if self.inner.remove(&full_key).await.is_some() {
                deleted += 1;
            }
        }
        Ok(deleted)
    }

    #[inline]
    async fn exists(&self, key: String) -> StorageResult<bool> {
        let full_key = self.get_full_key(key);
        Ok(self.inner.contains_key(&full_key))
    }
}
