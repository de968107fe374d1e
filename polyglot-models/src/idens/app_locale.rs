use crate::initializer::initializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub enum AppLocale {
    Table,
    AppName,
    LocaleId,
}

initializer!(
    AppLocale, "app_locale",
    order = super::INIT_APP_LOCALE_ORDER,
    updated_at = false,
    create_table = create_app_locale_table,
    create_indexes = create_app_locale_indexes
);

fn create_app_locale_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(AppLocale::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(AppLocale::AppName)
                .string_len(64)
                .not_null()
                .comment("FK: app.name"),
        )
        .col(
            ColumnDef::new(AppLocale::LocaleId)
                .string_len(32)
                .not_null()
                .comment("FK: locale.id"),
        )
        .primary_key(
            Index::create()
                .col(AppLocale::AppName)
                .col(AppLocale::LocaleId),
        )
        .to_owned()
}

fn create_app_locale_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![Index::create()
        .name("idx_app_locale_locale")
        .table(AppLocale::Table)
        .col(AppLocale::LocaleId)
        .to_owned()])
}
