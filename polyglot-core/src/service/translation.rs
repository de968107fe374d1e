use super::DbLocaleProbe;
use crate::{aggregator::TranslationAggregator, resolver::resolve_locale_id};
use polyglot_error::{service::ServiceError, ServiceResult};
use polyglot_models::domain::prelude::TranslationTree;
use polyglot_repository::AppRepository;
use sea_orm::DatabaseConnection;
use tracing::instrument;

/// Client-facing read of an app's translations
#[derive(Clone)]
pub struct TranslationService {
    db: DatabaseConnection,
    aggregator: TranslationAggregator,
}

impl TranslationService {
    pub fn new(db: DatabaseConnection, aggregator: TranslationAggregator) -> Self {
        Self { db, aggregator }
    }

    /// Translation tree of `app_name` for the locale `tag` resolves to.
    ///
    /// # Errors
    /// - `NotFound`: unknown app, unresolvable tag, or a resolved locale the
    ///   app is not associated with
    #[instrument(name = "translations", skip(self))]
    pub async fn translations(&self, app_name: &str, tag: &str) -> ServiceResult<TranslationTree> {
        if !AppRepository::exists(app_name, &self.db).await? {
            return Err(ServiceError::NotFound(format!("app {app_name}")));
        }
        let locale_id = resolve_locale_id(&DbLocaleProbe(&self.db), tag).await?;
        if !AppRepository::has_locale(app_name, &locale_id, &self.db).await? {
            return Err(ServiceError::NotFound(format!(
                "locale {locale_id} of app {app_name}"
            )));
        }
        self.aggregator.aggregate(app_name, &locale_id).await
    }

    /// Drop every cached translation tree
    pub async fn drop_all(&self) -> ServiceResult<usize> {
        self.aggregator.drop_all().await
    }
}
