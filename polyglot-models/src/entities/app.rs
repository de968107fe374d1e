use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Client application owning keys and a set of supported locales
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "app")]
pub struct Model {
    /// Unique app name
    #[sea_orm(primary_key, auto_increment = false)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::app_locale::Entity")]
    AppLocale,
    #[sea_orm(has_many = "super::key::Entity")]
    Key,
}

impl Related<super::app_locale::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppLocale.def()
    }
}

impl Related<super::key::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Key.def()
    }
}

/// Many-to-many: app <-> locale through `app_locale`
impl Related<super::locale::Entity> for Entity {
    fn to() -> RelationDef {
        super::app_locale::Relation::Locale.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::app_locale::Relation::App.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
