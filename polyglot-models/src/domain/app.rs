use serde::{Deserialize, Serialize};
use validator::Validate;

/// Replacement locale set for an app
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SetAppLocales {
    #[validate(length(min = 1, max = 64))]
    pub app_name: String,
    #[validate(length(min = 1, message = "locales is required"))]
    pub locales: Vec<String>,
}

/// An app with the ids of its associated locales
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppLocales {
    pub app_name: String,
    pub locales: Vec<String>,
}
