use crate::enums::common::TerritoryType;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Territory subtag: ISO 3166-1 alpha-2 (`US`) or UN M.49 numeric (`419`)
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "territory")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub r#type: TerritoryType,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::territory_name::Entity")]
    TerritoryName,
}

impl Related<super::territory_name::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TerritoryName.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
