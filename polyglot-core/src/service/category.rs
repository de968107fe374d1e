use super::{ensure_in_sync, required_name};
use crate::{aggregator::TranslationAggregator, cache_aside::CacheAside, keys::categories_lookup_key};
use chrono::Utc;
use polyglot_error::{service::ServiceError, ServiceResult};
use polyglot_models::{
    domain::prelude::{CategoryLookup, CategoryPageParams, NewCategory, PageResult, UpdateCategory},
    entities::prelude::{CategoryActiveModel, CategoryModel},
};
use polyglot_repository::{CategoryRepository, KeyRepository};
use sea_orm::{ActiveValue::Set, DatabaseConnection, IntoActiveModel};
use tracing::{info, instrument, warn};
use validator::Validate;

/// Key categories.
///
/// Every mutation drops the category lookup entry and the cached translation
/// trees of the apps owning keys in the category.
#[derive(Clone)]
pub struct CategoryService {
    db: DatabaseConnection,
    store: CacheAside,
    aggregator: TranslationAggregator,
}

impl CategoryService {
    pub fn new(db: DatabaseConnection, store: CacheAside, aggregator: TranslationAggregator) -> Self {
        Self {
            db,
            store,
            aggregator,
        }
    }

    /// Enabled categories, optionally narrowed by a name filter
    pub async fn lookup(&self, name_filter: Option<&str>) -> ServiceResult<Vec<CategoryLookup>> {
        let db = &self.db;
        self.store
            .lookup(&categories_lookup_key(), name_filter, || {
                CategoryRepository::lookup(db)
            })
            .await
    }

    pub async fn page(&self, params: CategoryPageParams) -> ServiceResult<PageResult<CategoryModel>> {
        params.validate()?;
        Ok(CategoryRepository::page(&params, &self.db).await?)
    }

    /// A non-deleted category
    pub async fn find(&self, id: i32) -> ServiceResult<CategoryModel> {
        match CategoryRepository::find_by_id(id, &self.db).await? {
            Some(category) if category.lifecycle().is_active() => Ok(category),
            _ => Err(not_found(id)),
        }
    }

    /// # Errors
    /// - `Invalid`: blank or overlong name
    /// - `Conflict`: the name is used by another category or by a key
    #[instrument(name = "category-create", skip(self))]
    pub async fn create(&self, category: NewCategory) -> ServiceResult<CategoryModel> {
        category.validate()?;
        let name = required_name(&category.name, "category")?;
        self.ensure_name_free(&name, None).await?;

        let now = Utc::now();
        let model = CategoryActiveModel {
            name: Set(name),
            disabled_at: Set(category.disabled_at),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };
        let created = CategoryRepository::create(model, &self.db).await?;
        info!(id = created.id, name = %created.name, "category created");
        self.invalidate(created.id).await;
        Ok(created)
    }

    /// # Errors
    /// - `NotFound`: missing or deleted category
    /// - `OutOfSync`: the caller's `updated_at` is older than the stored one
    /// - `Conflict`: the new name is taken
    #[instrument(name = "category-update", skip(self))]
    pub async fn update(&self, category: UpdateCategory) -> ServiceResult<CategoryModel> {
        category.validate()?;
        let stored = self.find(category.id).await?;
        ensure_in_sync(category.updated_at, stored.updated_at, "category")?;
        let name = required_name(&category.name, "category")?;
        self.ensure_name_free(&name, Some(stored.id)).await?;

        let mut model = stored.into_active_model();
        model.name = Set(name);
        model.disabled_at = Set(category.disabled_at);
        model.updated_at = Set(Utc::now());
        let updated = CategoryRepository::update(model, &self.db).await?;
        self.invalidate(updated.id).await;
        Ok(updated)
    }

    /// Soft-delete a category. Its keys drop out of the translation trees.
    #[instrument(name = "category-delete", skip(self))]
    pub async fn delete(&self, id: i32) -> ServiceResult<()> {
        let category = self.find(id).await?;
        CategoryRepository::set_deleted_at(category.id, Some(Utc::now()), &self.db).await?;
        info!(id, "category deleted");
        self.invalidate(id).await;
        Ok(())
    }

    /// Bring back a soft-deleted category.
    ///
    /// # Errors
    /// - `NotFound`: no such category
    /// - `Conflict`: the category is not deleted
    #[instrument(name = "category-restore", skip(self))]
    pub async fn restore(&self, id: i32) -> ServiceResult<CategoryModel> {
        let category = CategoryRepository::find_by_id(id, &self.db)
            .await?
            .ok_or_else(|| not_found(id))?;
        if category.lifecycle().is_active() {
            return Err(ServiceError::Conflict(format!("category {id} is not deleted")));
        }
        CategoryRepository::set_deleted_at(id, None, &self.db).await?;
        info!(id, "category restored");
        self.invalidate(id).await;
        self.find(id).await
    }

    async fn ensure_name_free(&self, name: &str, ignore_id: Option<i32>) -> ServiceResult<()> {
        if CategoryRepository::exists_by_name(name, ignore_id, &self.db).await? {
            return Err(ServiceError::Conflict(format!("category {name}")));
        }
        if KeyRepository::exists_by_name_global(name, &self.db).await? {
            return Err(ServiceError::Conflict(format!("category {name} is a key name")));
        }
        Ok(())
    }

    async fn invalidate(&self, id: i32) {
        self.store.invalidate(&categories_lookup_key()).await;
        let apps = match KeyRepository::app_names_by_category(id, &self.db).await {
            Ok(apps) => apps,
            Err(e) => {
                warn!(id, error = %e, "failed to list apps of category for invalidation");
                return;
            }
        };
        for app in apps {
            if let Err(e) = self.aggregator.invalidate_app(&app).await {
                warn!(app = %app, error = %e, "failed to invalidate translation trees");
            }
        }
    }
}

#[inline]
fn not_found(id: i32) -> ServiceError {
    ServiceError::NotFound(format!("category {id}"))
}
