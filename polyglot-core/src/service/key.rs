use super::{ensure_in_sync, required_name};
use crate::aggregator::TranslationAggregator;
use chrono::{DateTime, Utc};
use polyglot_error::{service::ServiceError, ServiceResult};
use polyglot_models::{
    domain::prelude::{
        KeyInfo, KeyPageInfo, KeyPageParams, NewKey, PageResult, UpdateKey,
    },
    entities::prelude::{KeyActiveModel, KeyModel, KeyTranslationActiveModel},
};
use polyglot_repository::{
    AppRepository, CategoryRepository, KeyRepository, KeyTranslationRepository,
};
use sea_orm::{ActiveValue::Set, DatabaseConnection, IntoActiveModel};
use std::collections::{BTreeSet, HashMap};
use tracing::{info, instrument, warn};
use validator::Validate;

/// Keys of an app with their per-locale translations.
///
/// A key always carries exactly one translation per locale of its app.
#[derive(Clone)]
pub struct KeyService {
    db: DatabaseConnection,
    aggregator: TranslationAggregator,
}

impl KeyService {
    pub fn new(db: DatabaseConnection, aggregator: TranslationAggregator) -> Self {
        Self { db, aggregator }
    }

    pub async fn page(&self, params: KeyPageParams) -> ServiceResult<PageResult<KeyPageInfo>> {
        params.validate()?;
        Ok(KeyRepository::page(&params, &self.db).await?)
    }

    /// A non-deleted key with its category and active translations
    pub async fn find(&self, id: i32) -> ServiceResult<KeyInfo> {
        let key = self.find_active(id).await?;
        let category = match key.category_id {
            Some(category_id) => CategoryRepository::find_by_id(category_id, &self.db).await?,
            None => None,
        };
        let translations = KeyTranslationRepository::find_active_by_key(key.id, &self.db).await?;
        Ok(KeyInfo {
            key,
            category,
            translations,
        })
    }

    /// # Errors
    /// - `NotFound`: unknown app or category
    /// - `Conflict`: the name is taken in the app and category, or is a category name
    /// - `Invalid`: translations do not cover exactly the app's locales
    #[instrument(name = "key-create", skip(self, key), fields(app = %key.app_name, name = %key.name))]
    pub async fn create(&self, key: NewKey) -> ServiceResult<KeyModel> {
        key.validate()?;
        if !AppRepository::exists(&key.app_name, &self.db).await? {
            return Err(ServiceError::NotFound(format!("app {}", key.app_name)));
        }
        self.ensure_category(key.category_id).await?;
        let name = required_name(&key.name, "key")?;
        self.ensure_name_free(&key.app_name, key.category_id, &name, None)
            .await?;
        let locale_ids = self
            .ensure_covers_app_locales(&key.app_name, key.translations.iter().map(|t| &t.locale_id))
            .await?;

        let now = Utc::now();
        let model = KeyActiveModel {
            app_name: Set(key.app_name.clone()),
            category_id: Set(key.category_id),
            name: Set(name),
            description: Set(key.description),
            disabled_at: Set(key.disabled_at),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };
        let translations = key
            .translations
            .into_iter()
            .map(|t| KeyTranslationActiveModel {
                key_id: Set(0),
                locale_id: Set(t.locale_id),
                value_type: Set(t.value_type),
                value: Set(t.value),
                created_at: Set(now),
                updated_at: Set(now),
                deleted_at: Set(None),
            })
            .collect();

        let created = KeyRepository::create_with_translations(model, translations, &self.db).await?;
        info!(id = created.id, "key created");
        self.aggregator
            .invalidate_many(&created.app_name, &locale_ids)
            .await;
        Ok(created)
    }

    /// Update a key and its translations.
    ///
    /// Every stored active translation named in the request must carry the
    /// `updated_at` the caller saw. A soft-deleted translation is overwritten
    /// and restored; a missing one is inserted.
    ///
    /// # Errors
    /// - `NotFound`: missing or deleted key, unknown category
    /// - `OutOfSync`: stale key or translation timestamp
    /// - `Conflict`: the new name is taken
    /// - `Invalid`: translations do not cover exactly the app's locales
    #[instrument(name = "key-update", skip(self, key), fields(id = key.id))]
    pub async fn update(&self, key: UpdateKey) -> ServiceResult<KeyModel> {
        key.validate()?;
        let stored = self.find_active(key.id).await?;
        ensure_in_sync(key.updated_at, stored.updated_at, "key")?;
        self.ensure_category(key.category_id).await?;
        let name = required_name(&key.name, "key")?;
        self.ensure_name_free(&stored.app_name, key.category_id, &name, Some(stored.id))
            .await?;
        let locale_ids = self
            .ensure_covers_app_locales(
                &stored.app_name,
                key.translations.iter().map(|t| &t.locale_id),
            )
            .await?;

        let mut existing: HashMap<String, _> =
            KeyTranslationRepository::find_by_key(stored.id, &self.db)
                .await?
                .into_iter()
                .map(|t| (t.locale_id.clone(), t))
                .collect();

        let now = Utc::now();
        let mut updates = Vec::new();
        let mut inserts = Vec::new();
        for translation in key.translations {
            match existing.remove(&translation.locale_id) {
                Some(current) => {
                    if current.lifecycle().is_active() {
                        let seen = translation.updated_at.unwrap_or(DateTime::<Utc>::MIN_UTC);
                        ensure_in_sync(
                            seen,
                            current.updated_at,
                            &format!("translation {}", current.locale_id),
                        )?;
                    }
                    let mut model = current.into_active_model();
                    model.value_type = Set(translation.value_type);
                    model.value = Set(translation.value);
                    model.updated_at = Set(now);
                    model.deleted_at = Set(None);
                    updates.push(model);
                }
                None => inserts.push(KeyTranslationActiveModel {
                    key_id: Set(stored.id),
                    locale_id: Set(translation.locale_id),
                    value_type: Set(translation.value_type),
                    value: Set(translation.value),
                    created_at: Set(now),
                    updated_at: Set(now),
                    deleted_at: Set(None),
                }),
            }
        }

        let app_name = stored.app_name.clone();
        let mut model = stored.into_active_model();
        model.category_id = Set(key.category_id);
        model.name = Set(name);
        model.description = Set(key.description);
        model.disabled_at = Set(key.disabled_at);
        model.updated_at = Set(now);

        let updated =
            KeyRepository::update_with_translations(model, updates, inserts, &self.db).await?;
        self.aggregator.invalidate_many(&app_name, &locale_ids).await;
        Ok(updated)
    }

    /// Soft-delete a key. Its translations are kept.
    #[instrument(name = "key-delete", skip(self))]
    pub async fn delete(&self, id: i32) -> ServiceResult<()> {
        let key = self.find_active(id).await?;
        KeyRepository::set_deleted_at(key.id, Some(Utc::now()), &self.db).await?;
        info!(id, "key deleted");
        self.invalidate_app(&key.app_name).await;
        Ok(())
    }

    /// Bring back a soft-deleted key.
    ///
    /// # Errors
    /// - `NotFound`: no such key
    /// - `Conflict`: the key is not deleted
    #[instrument(name = "key-restore", skip(self))]
    pub async fn restore(&self, id: i32) -> ServiceResult<KeyModel> {
        let key = KeyRepository::find_by_id(id, &self.db)
            .await?
            .ok_or_else(|| not_found(id))?;
        if key.lifecycle().is_active() {
            return Err(ServiceError::Conflict(format!("key {id} is not deleted")));
        }
        KeyRepository::set_deleted_at(id, None, &self.db).await?;
        info!(id, "key restored");
        self.invalidate_app(&key.app_name).await;
        self.find_active(id).await
    }

    async fn invalidate_app(&self, app_name: &str) {
        if let Err(e) = self.aggregator.invalidate_app(app_name).await {
            warn!(app = %app_name, error = %e, "failed to invalidate translation trees");
        }
    }

    async fn find_active(&self, id: i32) -> ServiceResult<KeyModel> {
        match KeyRepository::find_by_id(id, &self.db).await? {
            Some(key) if key.lifecycle().is_active() => Ok(key),
            _ => Err(not_found(id)),
        }
    }

    async fn ensure_category(&self, category_id: Option<i32>) -> ServiceResult<()> {
        let Some(id) = category_id else {
            return Ok(());
        };
        match CategoryRepository::find_by_id(id, &self.db).await? {
            Some(category) if category.lifecycle().is_active() => Ok(()),
            _ => Err(ServiceError::NotFound(format!("category {id}"))),
        }
    }

    async fn ensure_name_free(
        &self,
        app_name: &str,
        category_id: Option<i32>,
        name: &str,
        ignore_id: Option<i32>,
    ) -> ServiceResult<()> {
        if KeyRepository::exists_by_name(app_name, category_id, name, ignore_id, &self.db).await? {
            return Err(ServiceError::Conflict(format!("key {name}")));
        }
        if CategoryRepository::find_by_name(name, &self.db)
            .await?
            .is_some()
        {
            return Err(ServiceError::Conflict(format!("key {name} is a category name")));
        }
        Ok(())
    }

    /// Check that the translation locales are exactly the app's locales,
    /// each named once, and return them.
    async fn ensure_covers_app_locales<'a, I>(
        &self,
        app_name: &str,
        locale_ids: I,
    ) -> ServiceResult<Vec<String>>
    where
        I: Iterator<Item = &'a String>,
    {
        let mut given = BTreeSet::new();
        for locale_id in locale_ids {
            if !given.insert(locale_id.clone()) {
                return Err(ServiceError::Invalid(format!(
                    "duplicate translation for locale {locale_id}"
                )));
            }
        }
        let expected: BTreeSet<String> = AppRepository::locale_ids(app_name, &self.db)
            .await?
            .into_iter()
            .collect();
        if given != expected {
            let missing: Vec<&String> = expected.difference(&given).collect();
            let extra: Vec<&String> = given.difference(&expected).collect();
            return Err(ServiceError::Invalid(format!(
                "translations must cover the app locales (missing {missing:?}, unexpected {extra:?})"
            )));
        }
        Ok(given.into_iter().collect())
    }
}

#[inline]
fn not_found(id: i32) -> ServiceError {
    ServiceError::NotFound(format!("key {id}"))
}
