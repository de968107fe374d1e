use super::common::PageParams;
use crate::{
    entities::prelude::{CategoryModel, KeyModel, KeyTranslationModel},
    enums::common::ValueType,
};
use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Query params for listing keys
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct KeyPageParams {
    pub app_name: Option<String>,
    pub category_id: Option<i32>,
    pub name: Option<String>,
    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageParams,
}

/// Listing row: a key with the name and disabled state of its category
#[derive(Debug, Clone, Serialize, FromQueryResult)]
#[serde(rename_all = "camelCase")]
pub struct KeyPageInfo {
    pub id: i32,
    pub app_name: String,
    pub category_id: Option<i32>,
    pub name: String,
    pub disabled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub category_name: Option<String>,
    pub category_disabled_at: Option<DateTime<Utc>>,
}

/// A key with its category and active translations
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyInfo {
    #[serde(flatten)]
    pub key: KeyModel,
    pub category: Option<CategoryModel>,
    pub translations: Vec<KeyTranslationModel>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewKeyTranslation {
    #[validate(length(min = 1, max = 32))]
    pub locale_id: String,
    #[serde(default)]
    pub value_type: ValueType,
    pub value: String,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewKey {
    #[validate(length(min = 1, max = 64, message = "appName is required"))]
    pub app_name: String,
    pub category_id: Option<i32>,
    #[validate(length(min = 1, max = 64, message = "name is required"))]
    pub name: String,
    pub description: Option<String>,
    pub disabled_at: Option<DateTime<Utc>>,
    #[validate(length(min = 1, message = "translations is required"), nested)]
    pub translations: Vec<NewKeyTranslation>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateKeyTranslation {
    #[validate(length(min = 1, max = 32))]
    pub locale_id: String,
    #[serde(default)]
    pub value_type: ValueType,
    pub value: String,
    /// Last `updated_at` the caller has seen; `None` for a translation not stored yet
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateKey {
    pub id: i32,
    pub category_id: Option<i32>,
    #[validate(length(min = 1, max = 64, message = "name is required"))]
    pub name: String,
    pub description: Option<String>,
    pub disabled_at: Option<DateTime<Utc>>,
    pub updated_at: DateTime<Utc>,
    #[validate(length(min = 1, message = "translations is required"), nested)]
    pub translations: Vec<UpdateKeyTranslation>,
}
