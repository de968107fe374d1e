mod app;
mod category;
mod key;
mod locale;
mod territory;
mod translation;

pub use app::AppService;
pub use category::CategoryService;
pub use key::KeyService;
pub use locale::LocaleService;
pub use territory::TerritoryService;
pub use translation::TranslationService;

use crate::resolver::LocaleProbe;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use polyglot_error::{service::ServiceError, ServiceResult, StorageResult};
use polyglot_repository::LocaleRepository;
use sea_orm::DatabaseConnection;

/// Locale existence probe backed by the locale table.
pub(crate) struct DbLocaleProbe<'a>(pub &'a DatabaseConnection);

#[async_trait]
impl<'a> LocaleProbe for DbLocaleProbe<'a> {
    async fn locale_exists(&self, id: &str) -> StorageResult<bool> {
        LocaleRepository::exists(id, self.0).await
    }
}

/// Reject a write whose caller saw an older version than the stored one.
///
/// Compared at second resolution; `seen >= stored` passes.
pub(crate) fn ensure_in_sync(
    seen: DateTime<Utc>,
    stored: DateTime<Utc>,
    what: &str,
) -> ServiceResult<()> {
    if seen.timestamp() < stored.timestamp() {
        return Err(ServiceError::OutOfSync(what.to_string()));
    }
    Ok(())
}

/// Trimmed required name, `Invalid` when blank.
pub(crate) fn required_name(name: &str, what: &str) -> ServiceResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ServiceError::Invalid(format!("{what} name is required")));
    }
    Ok(name.to_string())
}
