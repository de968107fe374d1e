use crate::idens;
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement, TableDropStatement},
    DatabaseBackend,
};

/// Schema contribution of one table.
///
/// Implemented by the `DeriveIden` enums under `idens`; the migrator walks
/// [`initializers`] in `order()` to create tables, then indexes.
pub trait PGInitializer: Send + Sync {
    fn order(&self) -> i32;

    fn name(&self) -> &str;

    fn has_update_col(&self) -> bool;

    fn to_create_table_stmt(&self, backend: DatabaseBackend) -> TableCreateStatement;

    fn to_drop_table_stmt(&self, backend: DatabaseBackend) -> TableDropStatement;

    fn to_create_indexes_stmt(&self, backend: DatabaseBackend)
        -> Option<Vec<IndexCreateStatement>>;
}

/// Implements [`PGInitializer`] for a table iden enum.
///
/// ```ignore
/// initializer!(Category, "category", order = INIT_CATEGORY_ORDER, updated_at = true,
///     create_table = create_category_table, create_indexes = create_category_indexes);
/// ```
macro_rules! initializer {
    (@indexes $backend:ident) => {{
        let _ = $backend;
        None
    }};
    (@indexes $backend:ident, $create_indexes:path) => {
        $create_indexes($backend)
    };
    (
        $iden:ident, $name:literal,
        order = $order:expr,
        updated_at = $has_update:literal,
        create_table = $create_table:path
        $(, create_indexes = $create_indexes:path)?
    ) => {
        impl $crate::initializer::PGInitializer for $iden {
            fn order(&self) -> i32 {
                $order
            }

            fn name(&self) -> &str {
                $name
            }

            fn has_update_col(&self) -> bool {
                $has_update
            }

            fn to_create_table_stmt(
                &self,
                backend: sea_orm::DatabaseBackend,
            ) -> sea_orm::sea_query::TableCreateStatement {
                $create_table(backend)
            }

            fn to_drop_table_stmt(
                &self,
                _: sea_orm::DatabaseBackend,
            ) -> sea_orm::sea_query::TableDropStatement {
                sea_orm_migration::prelude::Table::drop()
                    .table($iden::Table)
                    .if_exists()
                    .to_owned()
            }

            fn to_create_indexes_stmt(
                &self,
                backend: sea_orm::DatabaseBackend,
            ) -> Option<Vec<sea_orm::sea_query::IndexCreateStatement>> {
                $crate::initializer::initializer!(@indexes backend $(, $create_indexes)?)
            }
        }
    };
}

pub(crate) use initializer;

pub fn initializers() -> Vec<Box<dyn PGInitializer>> {
    let mut initializers: Vec<Box<dyn PGInitializer>> = vec![
        Box::new(idens::language::Language::Table),
        Box::new(idens::script::Script::Table),
        Box::new(idens::territory::Territory::Table),
        Box::new(idens::variant::Variant::Table),
        Box::new(idens::locale::Locale::Table),
        Box::new(idens::locale_name::LocaleName::Table),
        Box::new(idens::territory_name::TerritoryName::Table),
        Box::new(idens::app::App::Table),
        Box::new(idens::app_locale::AppLocale::Table),
        Box::new(idens::category::Category::Table),
        Box::new(idens::key::Key::Table),
        Box::new(idens::key_translation::KeyTranslation::Table),
    ];

    initializers.sort_by_key(|init| init.order());
    initializers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initializers_are_ordered_and_unique() {
        let inits = initializers();
        let names: Vec<&str> = inits.iter().map(|i| i.name()).collect();
        assert_eq!(names.len(), 12);
        assert!(inits.windows(2).all(|w| w[0].order() < w[1].order()));
        let pos = |n: &str| names.iter().position(|x| *x == n).unwrap();
        assert!(pos("locale") < pos("app_locale"));
        assert!(pos("key") < pos("key_translation"));
    }

    #[test]
    fn test_update_columns() {
        let with_update: Vec<String> = initializers()
            .iter()
            .filter(|i| i.has_update_col())
            .map(|i| i.name().to_string())
            .collect();
        assert_eq!(with_update, vec!["category", "key", "key_translation"]);
    }
}
