use crate::{enums::common::ValueType, initializer::initializer};
use sea_orm::{ActiveEnum, DatabaseBackend, DeriveIden};
use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub enum KeyTranslation {
    Table,
    KeyId,
    LocaleId,
    ValueType,
    Value,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

initializer!(
    KeyTranslation, "key_translation",
    order = super::INIT_KEY_TRANSLATION_ORDER,
    updated_at = true,
    create_table = create_key_translation_table,
    create_indexes = create_key_translation_indexes
);

fn create_key_translation_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(KeyTranslation::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(KeyTranslation::KeyId)
                .integer()
                .not_null()
                .comment("FK: key.id"),
        )
        .col(
            ColumnDef::new(KeyTranslation::LocaleId)
                .string_len(32)
                .not_null()
                .comment("FK: locale.id"),
        )
        .col(
            ColumnDef::new(KeyTranslation::ValueType)
                .string_len(8)
                .not_null()
                .default(ValueType::Text.to_value())
                .comment("text | html | json"),
        )
        .col(ColumnDef::new(KeyTranslation::Value).text().not_null())
        .col(
            ColumnDef::new(KeyTranslation::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(KeyTranslation::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(KeyTranslation::DeletedAt)
                .timestamp_with_time_zone()
                .comment("Set while the locale is not associated with the key's app"),
        )
        .primary_key(
            Index::create()
                .col(KeyTranslation::KeyId)
                .col(KeyTranslation::LocaleId),
        )
        .to_owned()
}

fn create_key_translation_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![Index::create()
        .name("idx_key_translation_locale")
        .table(KeyTranslation::Table)
        .col(KeyTranslation::LocaleId)
        .to_owned()])
}
