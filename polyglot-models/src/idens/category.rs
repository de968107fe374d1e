use crate::initializer::initializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden)]
pub enum Category {
    Table,
    Id,
    Name,
    DisabledAt,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

initializer!(
    Category, "category",
    order = super::INIT_CATEGORY_ORDER,
    updated_at = true,
    create_table = create_category_table,
    create_indexes = create_category_indexes
);

fn create_category_table(_: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Category::Table)
        .if_not_exists()
        .col(pk_auto(Category::Id))
        .col(ColumnDef::new(Category::Name).string_len(64).not_null())
        .col(ColumnDef::new(Category::DisabledAt).timestamp_with_time_zone())
        .col(
            ColumnDef::new(Category::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Category::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(Category::DeletedAt)
                .timestamp_with_time_zone()
                .comment("Soft-delete marker"),
        )
        .to_owned()
}

fn create_category_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![Index::create()
        .name("ux_category_name")
        .table(Category::Table)
        .col(Category::Name)
        .unique()
        .to_owned()])
}
