use polyglot_error::StorageResult;
use polyglot_models::{
    domain::prelude::LocaleLookup,
    entities::prelude::{Locale, LocaleColumn, LocaleName, LocaleNameColumn},
};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

/// Repository for locales and locale display names
pub struct LocaleRepository;

impl LocaleRepository {
    /// Existence probe by exact id; issues a single count query
    pub async fn exists<C>(id: &str, db: &C) -> StorageResult<bool>
    where
        C: ConnectionTrait,
    {
        let count = Locale::find()
            .filter(LocaleColumn::Id.eq(id))
            .count(db)
            .await?;
        Ok(count > 0)
    }

    /// Subset of `ids` that exist, sorted
    pub async fn existing_ids<C>(ids: &[String], db: &C) -> StorageResult<Vec<String>>
    where
        C: ConnectionTrait,
    {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        Ok(Locale::find()
            .select_only()
            .column(LocaleColumn::Id)
            .filter(LocaleColumn::Id.is_in(ids.iter().cloned()))
            .order_by_asc(LocaleColumn::Id)
            .into_tuple::<String>()
            .all(db)
            .await?)
    }

    /// Names of every locale as written in the viewer locale, ordered by name
    pub async fn lookup<C>(viewer: &str, db: &C) -> StorageResult<Vec<LocaleLookup>>
    where
        C: ConnectionTrait,
    {
        Ok(LocaleName::find()
            .select_only()
            .column_as(LocaleNameColumn::LocaleIdTarget, "id")
            .column(LocaleNameColumn::Name)
            .filter(LocaleNameColumn::LocaleIdViewer.eq(viewer))
            .order_by_asc(LocaleNameColumn::Name)
            .into_model::<LocaleLookup>()
            .all(db)
            .await?)
    }
}
