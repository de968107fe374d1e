//! Application wiring for Polyglot.
//!
//! Loads settings, installs the logger, and builds the database connection,
//! the lookup cache and the services on top of them. Everything is created
//! once here and handed to the services explicitly.
mod logger;

pub use logger::Logger;
pub use polyglot_error::{PGError, PGResult};

use polyglot_core::Services;
use polyglot_error::storage::StorageError;
use polyglot_models::{
    cache::LookupCache, constants::LOOKUP_CACHE_NAME, settings::Settings, CacheProvider,
    DbManager,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tracing::{info, instrument, span, Instrument, Level};

pub struct AppContext {
    settings: Settings,
    logger: Option<Logger>,
    db_manager: Arc<dyn DbManager>,
    cache: LookupCache,
    services: Services,
}

impl AppContext {
    /// Load settings from `config`, install the logger and build every
    /// component.
    ///
    /// # Arguments
    /// * `config` - Path of the configuration file; a missing file means defaults
    pub async fn init<D, P>(config: String) -> PGResult<Self>
    where
        D: DbManager,
        P: CacheProvider,
    {
        let settings = Settings::new(config)?;

        let mut logger = Logger::new(Some(Logger::parse_level(&settings.general.log_level)));
        logger.initialize(settings.general.log_to_file)?;

        let mut ctx = Self::with_settings::<D, P>(settings)
            .instrument(span!(Level::INFO, "init-app"))
            .await?;
        ctx.logger = Some(logger);
        Ok(ctx)
    }

    /// Build every component from already loaded settings, leaving logging
    /// to the caller.
    #[instrument(name = "init-context", skip_all)]
    pub async fn with_settings<D, P>(settings: Settings) -> PGResult<Self>
    where
        D: DbManager,
        P: CacheProvider,
    {
        let db_manager = D::init(&settings).await?;
        info!("Database initialized successfully.");

        let cache_provider = P::init(&settings).await?;
        let cache = cache_provider
            .get_cache::<Vec<u8>>(LOOKUP_CACHE_NAME)
            .map_err(StorageError::from)?;
        info!("Cache provider initialized successfully.");

        let services = Services::new(
            db_manager.get_connection()?,
            Arc::clone(&cache),
            settings.cache.ttl(),
        );

        Ok(AppContext {
            settings,
            logger: None,
            db_manager,
            cache,
            services,
        })
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[inline]
    pub fn services(&self) -> &Services {
        &self.services
    }

    #[inline]
    pub fn cache(&self) -> LookupCache {
        Arc::clone(&self.cache)
    }

    #[inline]
    pub fn connection(&self) -> PGResult<DatabaseConnection> {
        Ok(self.db_manager.get_connection()?)
    }

    #[inline]
    pub fn change_log_level(&self, level: Level) {
        if let Some(logger) = &self.logger {
            logger.set_level(level);
        }
    }

    /// Close the connection pool.
    #[instrument(name = "shutdown", skip_all)]
    pub async fn shutdown(&self) -> PGResult<()> {
        self.db_manager.close().await?;
        info!("Shutdown completed");
        Ok(())
    }
}
