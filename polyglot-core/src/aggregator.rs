use crate::{cache_aside::CacheAside, keys::translations_key};
use heck::ToLowerCamelCase;
use polyglot_error::{storage::StorageError, ServiceResult};
use polyglot_models::domain::prelude::{TranslationRow, TranslationTree, TranslationValue};
use polyglot_repository::{AppRepository, KeyTranslationRepository};
use sea_orm::DatabaseConnection;
use std::collections::{btree_map::Entry, BTreeMap};
use tracing::{info, instrument, warn};

/// Builds and caches the nested translation tree of an (app, locale) pair.
#[derive(Clone)]
pub struct TranslationAggregator {
    db: DatabaseConnection,
    store: CacheAside,
}

impl TranslationAggregator {
    pub fn new(db: DatabaseConnection, store: CacheAside) -> Self {
        Self { db, store }
    }

    /// Tree of every active key of the app for an already resolved locale.
    #[instrument(level = "debug", skip(self))]
    pub async fn aggregate(&self, app_name: &str, locale_id: &str) -> ServiceResult<TranslationTree> {
        let key = translations_key(app_name, locale_id);
        let db = &self.db;
        self.store
            .read_through(&key, || async move {
                let rows =
                    KeyTranslationRepository::find_for_aggregation(app_name, locale_id, db).await?;
                Ok::<_, StorageError>(build_tree(rows))
            })
            .await
    }

    /// Drop the cached tree of one (app, locale) pair.
    pub async fn invalidate(&self, app_name: &str, locale_id: &str) {
        self.store
            .invalidate(&translations_key(app_name, locale_id))
            .await;
    }

    pub async fn invalidate_many<'a, I>(&self, app_name: &str, locale_ids: I)
    where
        I: IntoIterator<Item = &'a String>,
    {
        for locale_id in locale_ids {
            self.invalidate(app_name, locale_id).await;
        }
    }

    /// Drop the cached tree of every locale of the app.
    pub async fn invalidate_app(&self, app_name: &str) -> ServiceResult<()> {
        let locale_ids = AppRepository::locale_ids(app_name, &self.db).await?;
        self.invalidate_many(app_name, &locale_ids).await;
        Ok(())
    }

    /// Drop the cached tree of every (app, locale) association, returning how
    /// many entries were invalidated.
    #[instrument(skip(self))]
    pub async fn drop_all(&self) -> ServiceResult<usize> {
        let associations = AppRepository::all_locale_associations(&self.db).await?;
        for association in &associations {
            self.invalidate(&association.app_name, &association.locale_id)
                .await;
        }
        info!(count = associations.len(), "dropped cached translation trees");
        Ok(associations.len())
    }
}

/// Fold aggregation rows into a tree.
///
/// Key and category names are lower camel cased. Keys without a category sit
/// at the top level, the others under their category node. A category node
/// takes precedence over a top-level key whose name folds to the same string.
pub fn build_tree(rows: Vec<TranslationRow>) -> TranslationTree {
    let mut tree = TranslationTree::new();
    for row in rows {
        let name = row.key_name.to_lower_camel_case();
        let leaf = TranslationValue::Leaf(row.value);

        let Some(category) = row.category_name else {
            match tree.entry(name) {
                Entry::Vacant(slot) => {
                    slot.insert(leaf);
                }
                Entry::Occupied(mut slot) => {
                    if slot.get().as_node().is_some() {
                        warn!(key = %slot.key(), "key shadowed by a category of the same name");
                    } else {
                        warn!(key = %slot.key(), "duplicate key name after camel casing");
                        slot.insert(leaf);
                    }
                }
            }
            continue;
        };

        let node = tree
            .entry(category.to_lower_camel_case())
            .and_modify(|value| {
                if value.as_node().is_none() {
                    warn!(category = %category, "category replaces a key of the same name");
                    *value = TranslationValue::Node(BTreeMap::new());
                }
            })
            .or_insert_with(|| TranslationValue::Node(BTreeMap::new()));
        if let TranslationValue::Node(children) = node {
            if children.insert(name, leaf).is_some() {
                warn!(category = %category, "duplicate key name after camel casing");
            }
        }
    }
    tree
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(key: &str, category: Option<&str>, value: Option<&str>) -> TranslationRow {
        TranslationRow {
            key_name: key.into(),
            category_name: category.map(Into::into),
            value: value.map(Into::into),
        }
    }

    #[test]
    fn test_nests_keys_under_camel_cased_category() {
        let tree = build_tree(vec![
            row("not_found", Some("Errors"), Some("Not found")),
            row("Welcome", None, Some("Hi")),
            row("page-title", Some("Errors"), None),
        ]);
        assert_eq!(
            serde_json::to_value(&tree).unwrap(),
            json!({
                "errors": {"notFound": "Not found", "pageTitle": null},
                "welcome": "Hi"
            })
        );
    }

    #[test]
    fn test_missing_translation_is_null_leaf() {
        let tree = build_tree(vec![row("sign in", None, None)]);
        assert_eq!(tree.get("signIn"), Some(&TranslationValue::Leaf(None)));
    }

    #[test]
    fn test_category_wins_over_colliding_key() {
        let tree = build_tree(vec![
            row("user_menu", None, Some("Menu")),
            row("logout", Some("UserMenu"), Some("Log out")),
        ]);
        let node = tree.get("userMenu").and_then(TranslationValue::as_node).unwrap();
        assert_eq!(node.get("logout"), Some(&TranslationValue::leaf("Log out")));

        let tree = build_tree(vec![
            row("logout", Some("UserMenu"), Some("Log out")),
            row("user_menu", None, Some("Menu")),
        ]);
        assert!(tree.get("userMenu").and_then(TranslationValue::as_node).is_some());
    }

    #[test]
    fn test_empty_rows_build_empty_tree() {
        assert!(build_tree(Vec::new()).is_empty());
    }
}
