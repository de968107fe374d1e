use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One active key of an app with its optional category and the value of its
/// translation for the requested locale, if any.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult)]
pub struct TranslationRow {
    pub key_name: String,
    pub category_name: Option<String>,
    pub value: Option<String>,
}

/// Aggregated translations of one (app, locale) pair, keyed by camel-cased names.
pub type TranslationTree = BTreeMap<String, TranslationValue>;

/// Node of a [`TranslationTree`].
///
/// Serializes untagged: a leaf is a JSON string or `null`, a node is a JSON
/// object holding the keys of one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TranslationValue {
    Leaf(Option<String>),
    Node(BTreeMap<String, TranslationValue>),
}

impl TranslationValue {
    #[inline]
    pub fn leaf(value: impl Into<String>) -> Self {
        TranslationValue::Leaf(Some(value.into()))
    }

    #[inline]
    pub fn as_node(&self) -> Option<&BTreeMap<String, TranslationValue>> {
        match self {
            TranslationValue::Node(children) => Some(children),
            TranslationValue::Leaf(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tree_serializes_as_plain_json() {
        let mut errors = BTreeMap::new();
        errors.insert("notFound".to_string(), TranslationValue::leaf("Not found"));
        let mut tree = TranslationTree::new();
        tree.insert("errors".into(), TranslationValue::Node(errors));
        tree.insert("welcome".into(), TranslationValue::Leaf(None));

        let value = serde_json::to_value(&tree).unwrap();
        assert_eq!(
            value,
            json!({"errors": {"notFound": "Not found"}, "welcome": null})
        );

        let back: TranslationTree = serde_json::from_value(value).unwrap();
        assert_eq!(back, tree);
    }
}
