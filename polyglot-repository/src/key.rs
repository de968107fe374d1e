use chrono::{DateTime, Utc};
use polyglot_error::{storage::StorageError, StorageResult};
use polyglot_models::{
    domain::prelude::{KeyPageInfo, KeyPageParams, PageResult},
    entities::{
        key::Relation as KeyRelation,
        prelude::{
            CategoryColumn, Key, KeyActiveModel, KeyColumn, KeyModel, KeyTranslation,
            KeyTranslationActiveModel,
        },
    },
};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, EntityTrait,
    JoinType, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait,
    RelationTrait, TransactionTrait,
};

/// Repository for key operations
pub struct KeyRepository;

impl KeyRepository {
    /// Insert a key together with its translations in a single transaction
    pub async fn create_with_translations<C>(
        key: KeyActiveModel,
        translations: Vec<KeyTranslationActiveModel>,
        db: &C,
    ) -> StorageResult<KeyModel>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let model = db
            .transaction::<_, _, StorageError>(|txn| {
                Box::pin(async move {
                    let model = key.insert(txn).await?;
                    let translations = translations.into_iter().map(|mut t| {
                        t.key_id = sea_orm::Set(model.id);
                        t
                    });
                    KeyTranslation::insert_many(translations)
                        .on_empty_do_nothing()
                        .exec(txn)
                        .await?;
                    Ok(model)
                })
            })
            .await?;
        Ok(model)
    }

    /// Update a key and upsert the given translations in a single transaction.
    ///
    /// Translations carrying a primary key that already exists are updated in
    /// place, the rest are inserted.
    pub async fn update_with_translations<C>(
        key: KeyActiveModel,
        updates: Vec<KeyTranslationActiveModel>,
        inserts: Vec<KeyTranslationActiveModel>,
        db: &C,
    ) -> StorageResult<KeyModel>
    where
        C: ConnectionTrait + TransactionTrait,
    {
        let model = db
            .transaction::<_, _, StorageError>(|txn| {
                Box::pin(async move {
                    let model = key.update(txn).await?;
                    for translation in updates {
                        translation.update(txn).await?;
                    }
                    KeyTranslation::insert_many(inserts)
                        .on_empty_do_nothing()
                        .exec(txn)
                        .await?;
                    Ok(model)
                })
            })
            .await?;
        Ok(model)
    }

    /// Find a key by id regardless of its soft-delete state
    pub async fn find_by_id<C>(id: i32, db: &C) -> StorageResult<Option<KeyModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Key::find_by_id(id).one(db).await?)
    }

    /// Check whether another key of the app already uses `name` in the category
    pub async fn exists_by_name<C>(
        app_name: &str,
        category_id: Option<i32>,
        name: &str,
        ignore_id: Option<i32>,
        db: &C,
    ) -> StorageResult<bool>
    where
        C: ConnectionTrait,
    {
        let category = match category_id {
            Some(id) => KeyColumn::CategoryId.eq(id),
            None => KeyColumn::CategoryId.is_null(),
        };
        let count = Key::find()
            .filter(KeyColumn::AppName.eq(app_name))
            .filter(KeyColumn::Name.eq(name))
            .filter(category)
            .apply_if(ignore_id, |q, id| q.filter(KeyColumn::Id.ne(id)))
            .count(db)
            .await?;
        Ok(count > 0)
    }

    /// Check whether any key of any app uses `name`
    pub async fn exists_by_name_global<C>(name: &str, db: &C) -> StorageResult<bool>
    where
        C: ConnectionTrait,
    {
        let count = Key::find()
            .filter(KeyColumn::Name.eq(name))
            .count(db)
            .await?;
        Ok(count > 0)
    }

    /// Names of the apps owning at least one key in the category
    pub async fn app_names_by_category<C>(category_id: i32, db: &C) -> StorageResult<Vec<String>>
    where
        C: ConnectionTrait,
    {
        Ok(Key::find()
            .select_only()
            .column(KeyColumn::AppName)
            .distinct()
            .filter(KeyColumn::CategoryId.eq(category_id))
            .order_by_asc(KeyColumn::AppName)
            .into_tuple::<String>()
            .all(db)
            .await?)
    }

    /// Set or clear the soft-delete marker, returning whether a row changed
    pub async fn set_deleted_at<C>(
        id: i32,
        deleted_at: Option<DateTime<Utc>>,
        db: &C,
    ) -> StorageResult<bool>
    where
        C: ConnectionTrait,
    {
        let res = Key::update_many()
            .col_expr(KeyColumn::DeletedAt, Expr::value(deleted_at))
            .filter(KeyColumn::Id.eq(id))
            .exec(db)
            .await?;
        Ok(res.rows_affected > 0)
    }

    /// Paginate non-deleted keys whose category, if any, is not deleted
    pub async fn page<C>(params: &KeyPageParams, db: &C) -> StorageResult<PageResult<KeyPageInfo>>
    where
        C: ConnectionTrait,
    {
        let query = Key::find()
            .join(JoinType::LeftJoin, KeyRelation::Category.def())
            .filter(KeyColumn::DeletedAt.is_null())
            .filter(
                Condition::any()
                    .add(KeyColumn::CategoryId.is_null())
                    .add(CategoryColumn::DeletedAt.is_null()),
            )
            .apply_if(params.app_name.as_ref(), |q, app_name| {
                q.filter(KeyColumn::AppName.eq(app_name.clone()))
            })
            .apply_if(params.category_id, |q, category_id| {
                q.filter(KeyColumn::CategoryId.eq(category_id))
            })
            .apply_if(params.name.as_ref(), |q, name| {
                q.filter(KeyColumn::Name.like(format!("%{name}%")))
            })
            .order_by(KeyColumn::Id, Order::Asc);

        let (page, page_size) = (params.page.page(), params.page.page_size());
        let total = query.clone().count(db).await?;
        let records = query
            .select_only()
            .columns([
                KeyColumn::Id,
                KeyColumn::AppName,
                KeyColumn::CategoryId,
                KeyColumn::Name,
                KeyColumn::DisabledAt,
                KeyColumn::CreatedAt,
                KeyColumn::UpdatedAt,
            ])
            .column_as(CategoryColumn::Name, "category_name")
            .column_as(CategoryColumn::DisabledAt, "category_disabled_at")
            .into_model::<KeyPageInfo>()
            .paginate(db, page_size as u64)
            .fetch_page((page - 1) as u64)
            .await?;

        Ok(PageResult::new(records, total, page, page_size))
    }
}
