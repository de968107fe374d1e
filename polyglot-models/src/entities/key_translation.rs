use crate::enums::common::{Lifecycle, ValueType};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Value of a key for one locale.
///
/// Soft-deleted independently of its key when the locale is removed from the
/// app, and restored with its original value when the locale is re-added.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "key_translation")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub key_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub locale_id: String,
    pub value_type: ValueType,
    pub value: String,
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
    #[sea_orm(
        belongs_to = "super::key::Entity",
        from = "Column::KeyId",
        to = "super::key::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Key,
    #[sea_orm(
        belongs_to = "super::locale::Entity",
        from = "Column::LocaleId",
        to = "super::locale::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Locale,
}

impl Related<super::key::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Key.def()
    }
}

impl Related<super::locale::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Locale.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
