use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Localized name of a territory
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "territory_name")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub territory_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub locale_id: String,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::territory::Entity",
        from = "Column::TerritoryId",
        to = "super::territory::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Territory,
    #[sea_orm(
        belongs_to = "super::locale::Entity",
        from = "Column::LocaleId",
        to = "super::locale::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Locale,
}

impl Related<super::territory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Territory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
