use polyglot_error::StorageResult;
use polyglot_models::entities::prelude::{
    App, AppActiveModel, AppColumn, AppLocale, AppLocaleActiveModel, AppLocaleColumn,
    AppLocaleModel, AppModel,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

/// Repository for apps and their locale associations
pub struct AppRepository;

impl AppRepository {
    /// Check whether an app with the given name exists
    pub async fn exists<C>(name: &str, db: &C) -> StorageResult<bool>
    where
        C: ConnectionTrait,
    {
        let count = App::find()
            .filter(AppColumn::Name.eq(name))
            .count(db)
            .await?;
        Ok(count > 0)
    }

    /// Return the app, inserting it first when missing
    pub async fn find_or_create<C>(name: &str, db: &C) -> StorageResult<AppModel>
    where
        C: ConnectionTrait,
    {
        if let Some(app) = App::find_by_id(name.to_string()).one(db).await? {
            return Ok(app);
        }
        let app = AppActiveModel {
            name: Set(name.to_string()),
        };
        Ok(app.insert(db).await?)
    }

    /// Ids of the locales associated with an app, sorted
    pub async fn locale_ids<C>(name: &str, db: &C) -> StorageResult<Vec<String>>
    where
        C: ConnectionTrait,
    {
        Ok(AppLocale::find()
            .select_only()
            .column(AppLocaleColumn::LocaleId)
            .filter(AppLocaleColumn::AppName.eq(name))
            .order_by_asc(AppLocaleColumn::LocaleId)
            .into_tuple::<String>()
            .all(db)
            .await?)
    }

    /// Check whether a locale is associated with an app
    pub async fn has_locale<C>(name: &str, locale_id: &str, db: &C) -> StorageResult<bool>
    where
        C: ConnectionTrait,
    {
        let count = AppLocale::find()
            .filter(AppLocaleColumn::AppName.eq(name))
            .filter(AppLocaleColumn::LocaleId.eq(locale_id))
            .count(db)
            .await?;
        Ok(count > 0)
    }

    /// Every (app, locale) association
    pub async fn all_locale_associations<C>(db: &C) -> StorageResult<Vec<AppLocaleModel>>
    where
        C: ConnectionTrait,
    {
        Ok(AppLocale::find()
            .order_by_asc(AppLocaleColumn::AppName)
            .order_by_asc(AppLocaleColumn::LocaleId)
            .all(db)
            .await?)
    }

    /// Remove every locale association of an app
    pub async fn clear_locales<C>(name: &str, db: &C) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        let res = AppLocale::delete_many()
            .filter(AppLocaleColumn::AppName.eq(name))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }

    /// Associate the given locales with an app
    pub async fn insert_locales<C>(name: &str, locale_ids: &[String], db: &C) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        if locale_ids.is_empty() {
            return Ok(());
        }
        let models = locale_ids.iter().map(|locale_id| AppLocaleActiveModel {
            app_name: Set(name.to_string()),
            locale_id: Set(locale_id.clone()),
        });
        AppLocale::insert_many(models).exec(db).await?;
        Ok(())
    }
}
