use crate::enums::common::TerritoryType;
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};

/// Lookup record carrying a display name the free-text filter matches against.
pub trait NamedRecord {
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult)]
pub struct CategoryLookup {
    pub id: i32,
    pub name: String,
}

/// Name of a target locale as written in the viewer's locale
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult)]
pub struct LocaleLookup {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromQueryResult)]
pub struct TerritoryLookup {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub territory_type: TerritoryType,
}

impl NamedRecord for CategoryLookup {
    fn name(&self) -> &str {
        &self.name
    }
}

impl NamedRecord for LocaleLookup {
    fn name(&self) -> &str {
        &self.name
    }
}

impl NamedRecord for TerritoryLookup {
    fn name(&self) -> &str {
        &self.name
    }
}
