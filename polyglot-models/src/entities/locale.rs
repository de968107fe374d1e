use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Fully composed BCP-47 tag broken into its components.
///
/// Examples: `en`, `en-US`, `zh-Hant-TW`, `sr-Cyrl`, `es-419`, `en-polyton`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "locale")]
pub struct Model {
    /// Canonical BCP-47 tag
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub language_id: String,
    pub script_id: Option<String>,
    pub territory_id: Option<String>,
    pub variant_id: Option<String>,
    /// Preferred form among tags resolving to the same components
    pub canonical: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::language::Entity",
        from = "Column::LanguageId",
        to = "super::language::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Language,
    #[sea_orm(
        belongs_to = "super::script::Entity",
        from = "Column::ScriptId",
        to = "super::script::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Script,
    #[sea_orm(
        belongs_to = "super::territory::Entity",
        from = "Column::TerritoryId",
        to = "super::territory::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Territory,
    #[sea_orm(
        belongs_to = "super::variant::Entity",
        from = "Column::VariantId",
        to = "super::variant::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Variant,
    #[sea_orm(has_many = "super::app_locale::Entity")]
    AppLocale,
}

impl Related<super::language::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Language.def()
    }
}

impl Related<super::territory::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Territory.def()
    }
}

impl Related<super::app_locale::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AppLocale.def()
    }
}

impl Related<super::app::Entity> for Entity {
    fn to() -> RelationDef {
        super::app_locale::Relation::App.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::app_locale::Relation::Locale.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
