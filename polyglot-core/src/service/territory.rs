use super::DbLocaleProbe;
use crate::{cache_aside::CacheAside, keys::territories_lookup_key, resolver::resolve_locale_id};
use polyglot_error::ServiceResult;
use polyglot_models::{domain::prelude::TerritoryLookup, enums::common::TerritoryType};
use polyglot_repository::TerritoryRepository;
use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct TerritoryService {
    db: DatabaseConnection,
    store: CacheAside,
}

impl TerritoryService {
    pub fn new(db: DatabaseConnection, store: CacheAside) -> Self {
        Self { db, store }
    }

    /// Territory names as written in `locale`, optionally narrowed by type
    pub async fn lookup(
        &self,
        locale: &str,
        territory_type: Option<TerritoryType>,
        name_filter: Option<&str>,
    ) -> ServiceResult<Vec<TerritoryLookup>> {
        let locale_id = resolve_locale_id(&DbLocaleProbe(&self.db), locale).await?;
        let db = &self.db;
        let key = territories_lookup_key(&locale_id, territory_type);
        self.store
            .lookup(&key, name_filter, || {
                TerritoryRepository::lookup(&locale_id, territory_type, db)
            })
            .await
    }
}
