use crate::initializer::initializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub enum Territory {
    Table,
    Id,
    Type,
}

initializer!(
    Territory, "territory",
    order = super::INIT_TERRITORY_ORDER,
    updated_at = false,
    create_table = create_territory_table,
    create_indexes = create_territory_indexes
);

fn create_territory_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Territory::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Territory::Id)
                .string_len(8)
                .not_null()
                .primary_key()
                .comment("ISO 3166-1 alpha-2 or UN M.49 code"),
        )
        .col(
            ColumnDef::new(Territory::Type)
                .string_len(8)
                .not_null()
                .comment("country | numeric"),
        )
        .to_owned()
}

fn create_territory_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![Index::create()
        .name("idx_territory_type")
        .table(Territory::Table)
        .col(Territory::Type)
        .to_owned()])
}
