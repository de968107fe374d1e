use crate::initializer::initializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub enum Locale {
    Table,
    Id,
    LanguageId,
    ScriptId,
    TerritoryId,
    VariantId,
    Canonical,
}

initializer!(
    Locale, "locale",
    order = super::INIT_LOCALE_ORDER,
    updated_at = false,
    create_table = create_locale_table,
    create_indexes = create_locale_indexes
);

fn create_locale_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Locale::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Locale::Id)
                .string_len(32)
                .not_null()
                .primary_key()
                .comment("Canonical BCP-47 tag"),
        )
        .col(
            ColumnDef::new(Locale::LanguageId)
                .string_len(8)
                .not_null()
                .comment("FK: language.id"),
        )
        .col(
            ColumnDef::new(Locale::ScriptId)
                .string_len(8)
                .comment("FK: script.id"),
        )
        .col(
            ColumnDef::new(Locale::TerritoryId)
                .string_len(8)
                .comment("FK: territory.id"),
        )
        .col(
            ColumnDef::new(Locale::VariantId)
                .string_len(16)
                .comment("FK: variant.id"),
        )
        .col(
            ColumnDef::new(Locale::Canonical)
                .boolean()
                .not_null()
                .default(false),
        )
        .to_owned()
}

fn create_locale_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![Index::create()
        .name("idx_locale_language")
        .table(Locale::Table)
        .col(Locale::LanguageId)
        .to_owned()])
}
