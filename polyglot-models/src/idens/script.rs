use crate::initializer::initializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub enum Script {
    Table,
    Id,
}

initializer!(
    Script, "script",
    order = super::INIT_SCRIPT_ORDER,
    updated_at = false,
    create_table = create_script_table
);

fn create_script_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Script::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Script::Id)
                .string_len(8)
                .not_null()
                .primary_key()
                .comment("ISO 15924 script subtag"),
        )
        .to_owned()
}
