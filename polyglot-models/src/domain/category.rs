use super::common::PageParams;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

/// Query params for listing categories
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPageParams {
    pub name: Option<String>,
    /// Include soft-deleted categories
    #[serde(default)]
    pub with_deleted: bool,
    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageParams,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    #[validate(length(min = 1, max = 64, message = "name is required"))]
    pub name: String,
    pub disabled_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategory {
    pub id: i32,
    #[validate(length(min = 1, max = 64, message = "name is required"))]
    pub name: String,
    pub disabled_at: Option<DateTime<Utc>>,
    /// Last `updated_at` the caller has seen
    pub updated_at: DateTime<Utc>,
}
