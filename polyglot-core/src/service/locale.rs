use super::DbLocaleProbe;
use crate::{
    cache_aside::CacheAside,
    keys::locales_lookup_key,
    resolver::{resolve_locale_id, LocaleProbe},
};
use async_trait::async_trait;
use polyglot_error::{ServiceResult, StorageResult};
use polyglot_models::domain::prelude::LocaleLookup;
use polyglot_repository::LocaleRepository;
use sea_orm::DatabaseConnection;

/// Locales and their display names
#[derive(Clone)]
pub struct LocaleService {
    db: DatabaseConnection,
    store: CacheAside,
}

impl LocaleService {
    pub fn new(db: DatabaseConnection, store: CacheAside) -> Self {
        Self { db, store }
    }

    /// Whether a locale with exactly this id is stored
    pub async fn is_available(&self, id: &str) -> ServiceResult<bool> {
        Ok(LocaleRepository::exists(id, &self.db).await?)
    }

    /// Resolve a requested tag to the most specific stored locale id
    pub async fn resolve(&self, tag: &str) -> ServiceResult<String> {
        resolve_locale_id(self, tag).await
    }

    /// Names of every locale as written in the viewer's language.
    ///
    /// The viewer tag is resolved first, so `en-US` and `en` share an entry
    /// when only `en` is stored.
    pub async fn lookup(
        &self,
        viewer: &str,
        name_filter: Option<&str>,
    ) -> ServiceResult<Vec<LocaleLookup>> {
        let viewer = self.resolve(viewer).await?;
        let db = &self.db;
        let key = locales_lookup_key(&viewer);
        self.store
            .lookup(&key, name_filter, || LocaleRepository::lookup(&viewer, db))
            .await
    }
}

#[async_trait]
impl LocaleProbe for LocaleService {
    async fn locale_exists(&self, id: &str) -> StorageResult<bool> {
        DbLocaleProbe(&self.db).locale_exists(id).await
    }
}
