//! Cache keys of the lookup domains and of the aggregated translations.
//!
//! Keys depend only on parameters that change the persistent query. The
//! free-text name filter of a lookup is never part of a key.

use polyglot_models::{
    constants::{ALL_TERRITORY_TYPES, CATEGORIES_LOOKUP_CACHE_KEY},
    enums::common::TerritoryType,
};

#[inline]
pub fn categories_lookup_key() -> String {
    CATEGORIES_LOOKUP_CACHE_KEY.to_string()
}

#[inline]
pub fn locales_lookup_key(viewer: &str) -> String {
    format!("locales:lookup:{viewer}")
}

#[inline]
pub fn territories_lookup_key(locale_id: &str, territory_type: Option<TerritoryType>) -> String {
    let kind = territory_type
        .map(|t| t.as_str())
        .unwrap_or(ALL_TERRITORY_TYPES);
    format!("territories:lookup:{locale_id}:{kind}")
}

#[inline]
pub fn translations_key(app_name: &str, locale_id: &str) -> String {
    format!("translations:{app_name}:{locale_id}")
}
