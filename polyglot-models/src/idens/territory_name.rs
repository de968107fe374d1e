use crate::initializer::initializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub enum TerritoryName {
    Table,
    TerritoryId,
    LocaleId,
    Name,
}

initializer!(
    TerritoryName, "territory_name",
    order = super::INIT_TERRITORY_NAME_ORDER,
    updated_at = false,
    create_table = create_territory_name_table
);

fn create_territory_name_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(TerritoryName::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(TerritoryName::TerritoryId)
                .string_len(8)
                .not_null()
                .comment("FK: territory.id"),
        )
        .col(
            ColumnDef::new(TerritoryName::LocaleId)
                .string_len(32)
                .not_null()
                .comment("FK: locale.id"),
        )
        .col(
            ColumnDef::new(TerritoryName::Name)
                .string_len(128)
                .not_null(),
        )
        .primary_key(
            Index::create()
                .col(TerritoryName::TerritoryId)
                .col(TerritoryName::LocaleId),
        )
        .to_owned()
}
