use super::required_name;
use crate::synchronizer::{AppLocaleSynchronizer, LocaleSyncOutcome};
use polyglot_error::{service::ServiceError, ServiceResult};
use polyglot_models::{
    domain::prelude::{AppLocales, SetAppLocales},
    entities::prelude::AppModel,
};
use polyglot_repository::AppRepository;
use sea_orm::DatabaseConnection;
use tracing::{info, instrument};
use validator::Validate;

/// Apps and their locale sets
#[derive(Clone)]
pub struct AppService {
    db: DatabaseConnection,
    synchronizer: AppLocaleSynchronizer,
}

impl AppService {
    pub fn new(db: DatabaseConnection, synchronizer: AppLocaleSynchronizer) -> Self {
        Self { db, synchronizer }
    }

    /// Register a new app.
    ///
    /// # Errors
    /// - `Invalid`: blank name
    /// - `Conflict`: an app with this name exists
    #[instrument(name = "app-create", skip(self))]
    pub async fn create(&self, name: &str) -> ServiceResult<AppModel> {
        let name = required_name(name, "app")?;
        if AppRepository::exists(&name, &self.db).await? {
            return Err(ServiceError::Conflict(format!("app {name}")));
        }
        let app = AppRepository::find_or_create(&name, &self.db).await?;
        info!(app = %app.name, "app created");
        Ok(app)
    }

    pub async fn exists(&self, name: &str) -> ServiceResult<bool> {
        Ok(AppRepository::exists(name, &self.db).await?)
    }

    /// The app with the sorted ids of its locales
    pub async fn locales(&self, name: &str) -> ServiceResult<AppLocales> {
        self.ensure_exists(name).await?;
        Ok(AppLocales {
            app_name: name.to_string(),
            locales: AppRepository::locale_ids(name, &self.db).await?,
        })
    }

    /// Whether every id in `locale_ids` is associated with the app
    pub async fn has_locales(&self, name: &str, locale_ids: &[String]) -> ServiceResult<bool> {
        self.ensure_exists(name).await?;
        let current = AppRepository::locale_ids(name, &self.db).await?;
        Ok(locale_ids.iter().all(|id| current.contains(id)))
    }

    /// Replace the locale set of the app.
    pub async fn set_locales(&self, params: SetAppLocales) -> ServiceResult<LocaleSyncOutcome> {
        params.validate()?;
        self.synchronizer
            .set_locales(&params.app_name, &params.locales)
            .await
    }

    async fn ensure_exists(&self, name: &str) -> ServiceResult<()> {
        if !AppRepository::exists(name, &self.db).await? {
            return Err(ServiceError::NotFound(format!("app {name}")));
        }
        Ok(())
    }
}
