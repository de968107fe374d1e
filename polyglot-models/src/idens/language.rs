use crate::initializer::initializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub enum Language {
    Table,
    Id,
}

initializer!(
    Language, "language",
    order = super::INIT_LANGUAGE_ORDER,
    updated_at = false,
    create_table = create_language_table
);

fn create_language_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Language::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Language::Id)
                .string_len(8)
                .not_null()
                .primary_key()
                .comment("ISO 639 language subtag"),
        )
        .to_owned()
}
