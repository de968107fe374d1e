use chrono::{DateTime, Utc};
use sea_orm::{sea_query::StringLen, DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Kind of content stored in a key translation.
#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    #[default]
    #[sea_orm(string_value = "text")]
    Text,
    #[sea_orm(string_value = "html")]
    Html,
    #[sea_orm(string_value = "json")]
    Json,
}

/// Territory code family: ISO 3166-1 alpha-2 country or UN M.49 numeric region.
#[derive(
    Debug,
    Copy,
    Clone,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(8))")]
#[serde(rename_all = "lowercase")]
pub enum TerritoryType {
    #[default]
    #[sea_orm(string_value = "country")]
    Country,
    #[sea_orm(string_value = "numeric")]
    Numeric,
}

impl TerritoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TerritoryType::Country => "country",
            TerritoryType::Numeric => "numeric",
        }
    }
}

impl Display for TerritoryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Soft-delete state of a row, derived from its nullable `deleted_at` column.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "at", rename_all = "camelCase")]
pub enum Lifecycle {
    Active,
    Deleted(DateTime<Utc>),
}

impl Lifecycle {
    #[inline]
    pub fn is_active(&self) -> bool {
        matches!(self, Lifecycle::Active)
    }

    /// Column value representing this state.
    #[inline]
    pub fn deleted_at(&self) -> Option<DateTime<Utc>> {
        match self {
            Lifecycle::Active => None,
            Lifecycle::Deleted(at) => Some(*at),
        }
    }
}

impl From<Option<DateTime<Utc>>> for Lifecycle {
    fn from(value: Option<DateTime<Utc>>) -> Self {
        match value {
            Some(at) => Lifecycle::Deleted(at),
            None => Lifecycle::Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_round_trips_column_value() {
        let now = Utc::now();
        assert_eq!(Lifecycle::from(None), Lifecycle::Active);
        assert_eq!(Lifecycle::from(Some(now)).deleted_at(), Some(now));
        assert!(!Lifecycle::Deleted(now).is_active());
    }

    #[test]
    fn test_value_type_serde() {
        assert_eq!(serde_json::to_string(&ValueType::Html).unwrap(), "\"html\"");
        let t: TerritoryType = serde_json::from_str("\"numeric\"").unwrap();
        assert_eq!(t, TerritoryType::Numeric);
        assert_eq!(t.to_string(), "numeric");
    }
}
