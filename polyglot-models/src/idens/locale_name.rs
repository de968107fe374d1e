use crate::initializer::initializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub enum LocaleName {
    Table,
    LocaleIdViewer,
    LocaleIdTarget,
    Name,
}

initializer!(
    LocaleName, "locale_name",
    order = super::INIT_LOCALE_NAME_ORDER,
    updated_at = false,
    create_table = create_locale_name_table
);

fn create_locale_name_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(LocaleName::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(LocaleName::LocaleIdViewer)
                .string_len(32)
                .not_null()
                .comment("Locale the name is written in"),
        )
        .col(
            ColumnDef::new(LocaleName::LocaleIdTarget)
                .string_len(32)
                .not_null()
                .comment("Locale being named"),
        )
        .col(ColumnDef::new(LocaleName::Name).string_len(128).not_null())
        .primary_key(
            Index::create()
                .col(LocaleName::LocaleIdViewer)
                .col(LocaleName::LocaleIdTarget),
        )
        .to_owned()
}
