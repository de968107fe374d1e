use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Association of an app with one of its supported locales
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "app_locale")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub app_name: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub locale_id: String,
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
        belongs_to = "super::locale::Entity",
        from = "Column::LocaleId",
        to = "super::locale::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Locale,
}

impl Related<super::app::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::App.def()
    }
}

impl Related<super::locale::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Locale.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
