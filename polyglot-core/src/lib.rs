pub mod aggregator;
pub mod cache_aside;
pub mod keys;
pub mod resolver;
pub mod service;
pub mod synchronizer;

pub use aggregator::TranslationAggregator;
pub use cache_aside::CacheAside;
pub use resolver::{resolve_locale_id, LocaleProbe};
pub use synchronizer::{AppLocaleSynchronizer, LocaleSyncOutcome};

use polyglot_models::cache::LookupCache;
use sea_orm::DatabaseConnection;
use service::{
    AppService, CategoryService, KeyService, LocaleService, TerritoryService, TranslationService,
};
use std::{sync::Arc, time::Duration};

/// Every service wired to one connection pool and one lookup cache.
#[derive(Clone)]
pub struct Services {
    pub apps: Arc<AppService>,
    pub categories: Arc<CategoryService>,
    pub keys: Arc<KeyService>,
    pub locales: Arc<LocaleService>,
    pub territories: Arc<TerritoryService>,
    pub translations: Arc<TranslationService>,
}

impl Services {
    pub fn new(db: DatabaseConnection, cache: LookupCache, ttl: Duration) -> Self {
        let store = CacheAside::new(cache, ttl);
        let aggregator = TranslationAggregator::new(db.clone(), store.clone());
        let synchronizer = AppLocaleSynchronizer::new(db.clone(), aggregator.clone());

        Self {
            apps: Arc::new(AppService::new(db.clone(), synchronizer)),
            categories: Arc::new(CategoryService::new(
                db.clone(),
                store.clone(),
                aggregator.clone(),
            )),
            keys: Arc::new(KeyService::new(db.clone(), aggregator.clone())),
            locales: Arc::new(LocaleService::new(db.clone(), store.clone())),
            territories: Arc::new(TerritoryService::new(db.clone(), store)),
            translations: Arc::new(TranslationService::new(db, aggregator)),
        }
    }
}
