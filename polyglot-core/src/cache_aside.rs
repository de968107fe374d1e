use polyglot_error::{storage::CacheError, ServiceResult, StorageResult};
use polyglot_models::{
    cache::{LookupCache, PGBaseCache},
    domain::prelude::NamedRecord,
};
use serde::{de::DeserializeOwned, Serialize};
use std::{collections::BTreeMap, future::Future, time::Duration};
use tracing::{debug, warn};

/// Value that can be stored in the lookup cache.
///
/// An empty payload is never served from the cache; it is treated as a miss.
pub trait CachePayload: Serialize + DeserializeOwned {
    fn is_empty_payload(&self) -> bool;
}

impl<T: Serialize + DeserializeOwned> CachePayload for Vec<T> {
    #[inline]
    fn is_empty_payload(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> CachePayload for BTreeMap<K, V>
where
    K: Serialize + DeserializeOwned + Ord,
    V: Serialize + DeserializeOwned,
{
    #[inline]
    fn is_empty_payload(&self) -> bool {
        self.is_empty()
    }
}

/// Read-through cache in front of a persistent query.
///
/// The cache is advisory: every cache failure is logged and the call falls
/// back to the query. Errors of the query itself are returned unchanged.
#[derive(Clone)]
pub struct CacheAside {
    cache: LookupCache,
    ttl: Duration,
}

impl CacheAside {
    pub fn new(cache: LookupCache, ttl: Duration) -> Self {
        Self { cache, ttl }
    }

    #[inline]
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Return the cached value for `key`, or run `query`, cache its result and
    /// return it.
    pub async fn read_through<V, F, Fut>(&self, key: &str, query: F) -> ServiceResult<V>
    where
        V: CachePayload,
        F: FnOnce() -> Fut,
        Fut: Future<Output = StorageResult<V>>,
    {
        if let Some(cached) = self.fetch::<V>(key).await {
            debug!(key, "cache hit");
            return Ok(cached);
        }

        debug!(key, "cache miss");
        let fresh = query().await?;
        self.populate(key, &fresh).await;
        Ok(fresh)
    }

    /// Read-through lookup followed by the free-text name filter.
    ///
    /// The cached entry always holds the unfiltered set.
    pub async fn lookup<T, F, Fut>(
        &self,
        key: &str,
        name_filter: Option<&str>,
        query: F,
    ) -> ServiceResult<Vec<T>>
    where
        T: NamedRecord + Serialize + DeserializeOwned,
        F: FnOnce() -> Fut,
        Fut: Future<Output = StorageResult<Vec<T>>>,
    {
        let records = self.read_through(key, query).await?;
        Ok(filter_by_name(records, name_filter))
    }

    /// Delete the entry for `key`. Failures are logged and swallowed.
    pub async fn invalidate(&self, key: &str) {
        match self.cache.delete(key.to_string()).await {
            Ok(existed) => debug!(key, existed, "cache entry invalidated"),
            Err(e) => warn!(key, error = %e, "failed to invalidate cache entry"),
        }
    }

    async fn fetch<V: CachePayload>(&self, key: &str) -> Option<V> {
        match self.cache.exists(key.to_string()).await {
            Ok(true) => {}
            Ok(false) => return None,
            Err(e) => {
                warn!(key, error = %e, "cache exists check failed");
                return None;
            }
        }

        let bytes = match self.cache.get(key.to_string()).await {
            Ok(Some(bytes)) if !bytes.is_empty() => bytes,
            Ok(_) => return None,
            Err(e) => {
                warn!(key, error = %e, "cache get failed");
                return None;
            }
        };

        match decode::<V>(&bytes) {
            Ok(value) if !value.is_empty_payload() => Some(value),
            Ok(_) => None,
            Err(e) => {
                warn!(key, error = %e, "discarding cache entry");
                None
            }
        }
    }

    async fn populate<V: CachePayload>(&self, key: &str, value: &V) {
        let bytes = match encode(value) {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!(key, error = %e, "skipping cache population");
                return;
            }
        };
        if let Err(e) = self
            .cache
            .set_with_ttl(key.to_string(), bytes, self.ttl)
            .await
        {
            warn!(key, error = %e, "failed to populate cache entry");
        }
    }
}

fn decode<V: DeserializeOwned>(bytes: &[u8]) -> Result<V, CacheError> {
    serde_json::from_slice(bytes).map_err(|e| CacheError::Malformed(e.to_string()))
}

fn encode<V: Serialize>(value: &V) -> Result<Vec<u8>, CacheError> {
    serde_json::to_vec(value).map_err(|e| CacheError::Malformed(e.to_string()))
}

/// Keep records whose name contains the trimmed filter, ignoring case.
/// A missing or blank filter keeps everything.
pub fn filter_by_name<T: NamedRecord>(records: Vec<T>, name_filter: Option<&str>) -> Vec<T> {
    let needle = match name_filter.map(str::trim) {
        Some(needle) if !needle.is_empty() => needle.to_lowercase(),
        _ => return records,
    };
    records
        .into_iter()
        .filter(|r| r.name().to_lowercase().contains(&needle))
        .collect()
}
