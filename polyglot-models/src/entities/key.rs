use crate::enums::common::Lifecycle;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Named translatable entry of an app, unique on (app, category, name)
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "key")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub app_name: String,
    pub category_id: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub disabled_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    /// Optimistic-concurrency token
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
    #[sea_orm(
        belongs_to = "super::app::Entity",
        from = "Column::AppName",
        to = "super::app::Column::Name",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    App,
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Category,
    #[sea_orm(has_many = "super::key_translation::Entity")]
    KeyTranslation,
}

impl Related<super::app::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::App.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::key_translation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::KeyTranslation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
