#![allow(dead_code)]

use async_trait::async_trait;
use polyglot_core::Services;
use polyglot_error::StorageResult;
use polyglot_models::{
    cache::{LookupCache, PGBaseCache},
    domain::prelude::{NewKey, NewKeyTranslation, SetAppLocales},
    entities::prelude::{
        KeyModel, Language, LanguageActiveModel, Locale, LocaleActiveModel, LocaleName,
        LocaleNameActiveModel, Script, ScriptActiveModel, Territory, TerritoryActiveModel,
        TerritoryName, TerritoryNameActiveModel,
    },
    enums::common::{TerritoryType, ValueType},
};
use polyglot_storage::{MokaCache, PGDbManager};
use sea_orm::{ActiveValue::Set, ConnectOptions, Database, DatabaseConnection, EntityTrait};
use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

/// Moka cache that counts how often an entry is written.
///
/// Every write follows a fresh persistent query, so the count equals the
/// number of queries served past the cache.
pub struct CountingCache {
    inner: MokaCache<Vec<u8>>,
    writes: AtomicUsize,
}

impl CountingCache {
    pub fn new() -> Self {
        Self {
            inner: MokaCache::new("Lookup".into(), "pg:Lookup".into(), Some(1_000), None),
            writes: AtomicUsize::new(0),
        }
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PGBaseCache for CountingCache {
    type Value = Vec<u8>;

    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn get(&self, key: String) -> StorageResult<Option<Vec<u8>>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: String, value: Vec<u8>) -> StorageResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value).await
    }

    async fn set_with_ttl(&self, key: String, value: Vec<u8>, ttl: Duration) -> StorageResult<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set_with_ttl(key, value, ttl).await
    }

    async fn delete(&self, key: String) -> StorageResult<bool> {
        self.inner.delete(key).await
    }

    async fn delete_all(&self) -> StorageResult<u64> {
        self.inner.delete_all().await
    }

    async fn delete_by_keys(&self, keys: Vec<String>) -> StorageResult<u64> {
        self.inner.delete_by_keys(keys).await
    }

    async fn exists(&self, key: String) -> StorageResult<bool> {
        self.inner.exists(key).await
    }
}

pub struct TestContext {
    pub db: DatabaseConnection,
    pub cache: Arc<CountingCache>,
    pub services: Services,
}

/// Fresh in-memory database with the full schema, reference data and a
/// counting cache.
pub async fn setup() -> TestContext {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(opt).await.unwrap();
    PGDbManager::migrate(&db).await.unwrap();
    seed_reference(&db).await;

    let cache = Arc::new(CountingCache::new());
    let lookup: LookupCache = cache.clone();
    let services = Services::new(db.clone(), lookup, Duration::from_secs(60));
    TestContext {
        db,
        cache,
        services,
    }
}

async fn seed_reference(db: &DatabaseConnection) {
    Language::insert_many(["en", "de", "az", "fr", "nl"].map(|id| LanguageActiveModel {
        id: Set(id.into()),
    }))
    .exec(db)
    .await
    .unwrap();

    Script::insert(ScriptActiveModel {
        id: Set("Arab".into()),
    })
    .exec(db)
    .await
    .unwrap();

    Territory::insert_many(
        [
            ("GB", TerritoryType::Country),
            ("NL", TerritoryType::Country),
            ("DE", TerritoryType::Country),
            ("150", TerritoryType::Numeric),
        ]
        .map(|(id, kind)| TerritoryActiveModel {
            id: Set(id.into()),
            r#type: Set(kind),
        }),
    )
    .exec(db)
    .await
    .unwrap();

    let locales = [
        ("en", "en", None, None),
        ("en-GB", "en", None, Some("GB")),
        ("de", "de", None, None),
        ("nl", "nl", None, None),
        ("az", "az", None, None),
        ("az-Arab", "az", Some("Arab"), None),
    ];
    Locale::insert_many(locales.map(|(id, language, script, territory)| {
        LocaleActiveModel {
            id: Set(id.into()),
            language_id: Set(language.into()),
            script_id: Set(script.map(Into::into)),
            territory_id: Set(territory.map(Into::into)),
            variant_id: Set(None),
            canonical: Set(true),
        }
    }))
    .exec(db)
    .await
    .unwrap();

    let locale_names = [
        ("en", "en", "English"),
        ("en", "de", "German"),
        ("en", "nl", "Dutch"),
        ("en", "az", "Azerbaijani"),
        ("de", "en", "Englisch"),
        ("de", "de", "Deutsch"),
    ];
    LocaleName::insert_many(locale_names.map(|(viewer, target, name)| {
        LocaleNameActiveModel {
            locale_id_viewer: Set(viewer.into()),
            locale_id_target: Set(target.into()),
            name: Set(name.into()),
        }
    }))
    .exec(db)
    .await
    .unwrap();

    let territory_names = [
        ("GB", "en", "United Kingdom"),
        ("NL", "en", "Netherlands"),
        ("DE", "en", "Germany"),
        ("150", "en", "Europe"),
    ];
    TerritoryName::insert_many(territory_names.map(|(territory, locale, name)| {
        TerritoryNameActiveModel {
            territory_id: Set(territory.into()),
            locale_id: Set(locale.into()),
            name: Set(name.into()),
        }
    }))
    .exec(db)
    .await
    .unwrap();
}

/// Create an app associated with `locales`.
pub async fn seed_app(services: &Services, app: &str, locales: &[&str]) {
    services.apps.create(app).await.unwrap();
    services
        .apps
        .set_locales(SetAppLocales {
            app_name: app.into(),
            locales: locales.iter().map(|l| l.to_string()).collect(),
        })
        .await
        .unwrap();
}

/// Create a key with one text translation per `(locale, value)` pair.
pub async fn seed_key(
    services: &Services,
    app: &str,
    category_id: Option<i32>,
    name: &str,
    values: &[(&str, &str)],
) -> KeyModel {
    services
        .keys
        .create(NewKey {
            app_name: app.into(),
            category_id,
            name: name.into(),
            description: None,
            disabled_at: None,
            translations: values
                .iter()
                .map(|(locale, value)| NewKeyTranslation {
                    locale_id: locale.to_string(),
                    value_type: ValueType::Text,
                    value: value.to_string(),
                })
                .collect(),
        })
        .await
        .unwrap()
}
