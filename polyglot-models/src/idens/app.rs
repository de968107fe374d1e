use crate::initializer::initializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
pub enum App {
    Table,
    Name,
}

initializer!(
    App, "app",
    order = super::INIT_APP_ORDER,
    updated_at = false,
    create_table = create_app_table
);

fn create_app_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(App::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(App::Name)
                .string_len(64)
                .not_null()
                .primary_key()
                .comment("Client app name"),
        )
        .to_owned()
}
