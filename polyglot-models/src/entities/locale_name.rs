use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Display name of a target locale rendered in a viewer locale's language.
///
/// Example: viewer `nl`, target `en-US`, name `Engels (Verenigde Staten)`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "locale_name")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub locale_id_viewer: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub locale_id_target: String,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::locale::Entity",
        from = "Column::LocaleIdViewer",
        to = "super::locale::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    LocaleViewer,
    #[sea_orm(
        belongs_to = "super::locale::Entity",
        from = "Column::LocaleIdTarget",
        to = "super::locale::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    LocaleTarget,
}

impl ActiveModelBehavior for ActiveModel {}
