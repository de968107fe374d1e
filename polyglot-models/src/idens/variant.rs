use crate::initializer::initializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub enum Variant {
    Table,
    Id,
}

initializer!(
    Variant, "variant",
    order = super::INIT_VARIANT_ORDER,
    updated_at = false,
    create_table = create_variant_table
);

fn create_variant_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Variant::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Variant::Id)
                .string_len(16)
                .not_null()
                .primary_key(),
        )
        .to_owned()
}
