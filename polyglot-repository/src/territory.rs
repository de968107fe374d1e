use polyglot_error::StorageResult;
use polyglot_models::{
    domain::prelude::TerritoryLookup,
    entities::{
        prelude::{TerritoryColumn, TerritoryName, TerritoryNameColumn},
        territory_name::Relation as TerritoryNameRelation,
    },
    enums::common::TerritoryType,
};
use sea_orm::{
    ColumnTrait, ConnectionTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    QueryTrait, RelationTrait,
};

/// Repository for territory display names
pub struct TerritoryRepository;

impl TerritoryRepository {
    /// Names of territories as written in `locale_id`, optionally narrowed by type
    pub async fn lookup<C>(
        locale_id: &str,
        territory_type: Option<TerritoryType>,
        db: &C,
    ) -> StorageResult<Vec<TerritoryLookup>>
    where
        C: ConnectionTrait,
    {
        Ok(TerritoryName::find()
            .select_only()
            .column_as(TerritoryNameColumn::TerritoryId, "id")
            .column(TerritoryNameColumn::Name)
            .column_as(TerritoryColumn::Type, "territory_type")
            .join(JoinType::InnerJoin, TerritoryNameRelation::Territory.def())
            .filter(TerritoryNameColumn::LocaleId.eq(locale_id))
            .apply_if(territory_type, |q, t| q.filter(TerritoryColumn::Type.eq(t)))
            .order_by_asc(TerritoryNameColumn::Name)
            .into_model::<TerritoryLookup>()
            .all(db)
            .await?)
    }
}
