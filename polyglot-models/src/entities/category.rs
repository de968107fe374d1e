use crate::enums::common::Lifecycle;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Optional grouping for keys; its camel-cased name becomes a nested node
/// of the aggregated translation tree.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Unique category name, never equal to a key name
    #[sea_orm(unique)]
    pub name: String,
    pub disabled_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
    pub deleted_at: Option<DateTimeUtc>,
}

impl Model {
    #[inline]
    pub fn lifecycle(&self) -> Lifecycle {
        Lifecycle::from(self.deleted_at)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::key::Entity")]
    Key,
}

impl Related<super::key::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Key.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
