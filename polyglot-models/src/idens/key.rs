use crate::initializer::initializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum Key {
    Table,
    Id,
    AppName,
    CategoryId,
    Name,
    Description,
    DisabledAt,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

initializer!(
    Key, "key",
    order = super::INIT_KEY_ORDER,
    updated_at = true,
    create_table = create_key_table,
    create_indexes = create_key_indexes
);

fn create_key_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Key::Table)
        .if_not_exists()
        .col(pk_auto(Key::Id))
        .col(
            ColumnDef::new(Key::AppName)
                .string_len(64)
                .not_null()
                .comment("FK: app.name"),
        )
        .col(
            ColumnDef::new(Key::CategoryId)
                .integer()
                .comment("FK: category.id"),
        )
        .col(ColumnDef::new(Key::Name).string_len(64).not_null())
        .col(ColumnDef::new(Key::Description).string_len(512))
        .col(ColumnDef::new(Key::DisabledAt).timestamp_with_time_zone())
        .col(
            ColumnDef::new(Key::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Key::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(ColumnDef::new(Key::DeletedAt).timestamp_with_time_zone())
        .to_owned()
}

fn create_key_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![
        Index::create()
            .name("ux_key_app_category_name")
            .table(Key::Table)
            .col(Key::AppName)
            .col(Key::CategoryId)
            .col(Key::Name)
            .unique()
            .to_owned(),
        Index::create()
            .name("idx_key_category")
            .table(Key::Table)
            .col(Key::CategoryId)
            .to_owned(),
    ])
}
