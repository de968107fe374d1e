use chrono::{DateTime, Utc};
use polyglot_error::StorageResult;
use polyglot_models::{
    domain::prelude::TranslationRow,
    entities::{
        key::Relation as KeyRelation,
        prelude::{
            CategoryColumn, Key, KeyColumn, KeyTranslation, KeyTranslationColumn,
            KeyTranslationModel,
        },
    },
};
use sea_orm::{
    sea_query::{Expr, Query},
    ColumnTrait, Condition, ConnectionTrait, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};

/// Repository for key translation rows
pub struct KeyTranslationRepository;

impl KeyTranslationRepository {
    /// Every translation of a key regardless of its soft-delete state
    pub async fn find_by_key<C>(key_id: i32, db: &C) -> StorageResult<Vec<KeyTranslationModel>>
    where
        C: ConnectionTrait,
    {
        Ok(KeyTranslation::find()
            .filter(KeyTranslationColumn::KeyId.eq(key_id))
            .order_by_asc(KeyTranslationColumn::LocaleId)
            .all(db)
            .await?)
    }

    /// Non-deleted translations of a key
    pub async fn find_active_by_key<C>(
        key_id: i32,
        db: &C,
    ) -> StorageResult<Vec<KeyTranslationModel>>
    where
        C: ConnectionTrait,
    {
        Ok(KeyTranslation::find()
            .filter(KeyTranslationColumn::KeyId.eq(key_id))
            .filter(KeyTranslationColumn::DeletedAt.is_null())
            .order_by_asc(KeyTranslationColumn::LocaleId)
            .all(db)
            .await?)
    }

    /// Clear the soft-delete marker of every translation in `locale_id` of
    /// any key of the app, deleted keys included. Values are left untouched.
    pub async fn restore_for_app_locale<C>(
        app_name: &str,
        locale_id: &str,
        db: &C,
    ) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        let res = KeyTranslation::update_many()
            .col_expr(
                KeyTranslationColumn::DeletedAt,
                Expr::value(Option::<DateTime<Utc>>::None),
            )
            .filter(KeyTranslationColumn::LocaleId.eq(locale_id))
            .filter(KeyTranslationColumn::DeletedAt.is_not_null())
            .filter(KeyTranslationColumn::KeyId.in_subquery(Self::app_key_ids(app_name)))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }

    /// Soft-delete every active translation in `locale_id` of any key of the app
    pub async fn soft_delete_for_app_locale<C>(
        app_name: &str,
        locale_id: &str,
        deleted_at: DateTime<Utc>,
        db: &C,
    ) -> StorageResult<u64>
    where
        C: ConnectionTrait,
    {
        let res = KeyTranslation::update_many()
            .col_expr(KeyTranslationColumn::DeletedAt, Expr::value(deleted_at))
            .filter(KeyTranslationColumn::LocaleId.eq(locale_id))
            .filter(KeyTranslationColumn::DeletedAt.is_null())
            .filter(KeyTranslationColumn::KeyId.in_subquery(Self::app_key_ids(app_name)))
            .exec(db)
            .await?;
        Ok(res.rows_affected)
    }

    /// Keys of the app that are visible to clients, each with its active
    /// translation for `locale_id` when one exists.
    ///
    /// A key is visible when neither it nor its category (if any) is deleted
    /// or disabled.
    pub async fn find_for_aggregation<C>(
        app_name: &str,
        locale_id: &str,
        db: &C,
    ) -> StorageResult<Vec<TranslationRow>>
    where
        C: ConnectionTrait,
    {
        let locale = locale_id.to_string();
        let translation_join = KeyRelation::KeyTranslation
            .def()
            .on_condition(move |_left, right| {
                Condition::all()
                    .add(Expr::col((right.clone(), KeyTranslationColumn::LocaleId)).eq(locale.clone()))
                    .add(Expr::col((right, KeyTranslationColumn::DeletedAt)).is_null())
            });

        Ok(Key::find()
            .select_only()
            .column_as(KeyColumn::Name, "key_name")
            .column_as(CategoryColumn::Name, "category_name")
            .column_as(KeyTranslationColumn::Value, "value")
            .join(JoinType::LeftJoin, KeyRelation::Category.def())
            .join(JoinType::LeftJoin, translation_join)
            .filter(KeyColumn::AppName.eq(app_name))
            .filter(KeyColumn::DeletedAt.is_null())
            .filter(KeyColumn::DisabledAt.is_null())
            .filter(
                Condition::any().add(KeyColumn::CategoryId.is_null()).add(
                    Condition::all()
                        .add(CategoryColumn::DeletedAt.is_null())
                        .add(CategoryColumn::DisabledAt.is_null()),
                ),
            )
            .order_by_asc(KeyColumn::Id)
            .into_model::<TranslationRow>()
            .all(db)
            .await?)
    }

    fn app_key_ids(app_name: &str) -> sea_orm::sea_query::SelectStatement {
        Query::select()
            .column(KeyColumn::Id)
            .from(Key)
            .and_where(Expr::col(KeyColumn::AppName).eq(app_name))
            .to_owned()
    }
}
