use crate::aggregator::TranslationAggregator;
use chrono::Utc;
use polyglot_error::{service::ServiceError, storage::StorageError, ServiceResult};
use polyglot_repository::{AppRepository, KeyTranslationRepository, LocaleRepository};
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::{info, instrument};

/// What a locale replacement changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocaleSyncOutcome {
    /// Locales newly associated with the app, sorted
    pub added: Vec<String>,
    /// Locales no longer associated with the app, sorted
    pub removed: Vec<String>,
    /// Translations brought back from soft-deletion
    pub restored: u64,
    pub soft_deleted: u64,
}

impl LocaleSyncOutcome {
    /// Locales whose aggregated trees are stale after the change.
    pub fn touched(&self) -> impl Iterator<Item = &String> {
        self.added.iter().chain(self.removed.iter())
    }
}

/// Replaces the locale set of an app and keeps key translations in step.
#[derive(Clone)]
pub struct AppLocaleSynchronizer {
    db: DatabaseConnection,
    aggregator: TranslationAggregator,
}

impl AppLocaleSynchronizer {
    pub fn new(db: DatabaseConnection, aggregator: TranslationAggregator) -> Self {
        Self { db, aggregator }
    }

    /// Replace the app's locale set with `locale_ids`.
    ///
    /// Runs in one transaction: the association set is cleared and rewritten,
    /// translations of added locales are restored (unless the app had no
    /// locales before) and translations of removed locales are soft-deleted.
    /// Any failure rolls the whole change back. Cached trees of the touched
    /// locales are invalidated after commit.
    #[instrument(skip(self))]
    pub async fn set_locales(
        &self,
        app_name: &str,
        locale_ids: &[String],
    ) -> ServiceResult<LocaleSyncOutcome> {
        let wanted: BTreeSet<String> = locale_ids
            .iter()
            .map(|id| id.trim().to_string())
            .collect();
        if wanted.is_empty() || wanted.iter().any(String::is_empty) {
            return Err(ServiceError::Invalid("locales".into()));
        }
        if !AppRepository::exists(app_name, &self.db).await? {
            return Err(ServiceError::NotFound(format!("app {app_name}")));
        }

        let wanted: Vec<String> = wanted.into_iter().collect();
        let known = LocaleRepository::existing_ids(&wanted, &self.db).await?;
        if known.len() != wanted.len() {
            let missing: Vec<&str> = wanted
                .iter()
                .filter(|id| !known.contains(id))
                .map(String::as_str)
                .collect();
            return Err(ServiceError::NotFound(format!(
                "locale {}",
                missing.join(", ")
            )));
        }

        let app = app_name.to_string();
        let outcome = self
            .db
            .transaction::<_, _, StorageError>(|txn| {
                Box::pin(async move {
                    let current: BTreeSet<String> = AppRepository::locale_ids(&app, txn)
                        .await?
                        .into_iter()
                        .collect();
                    let next: BTreeSet<String> = wanted.iter().cloned().collect();

                    AppRepository::clear_locales(&app, txn).await?;
                    AppRepository::insert_locales(&app, &wanted, txn).await?;

                    let mut outcome = LocaleSyncOutcome {
                        added: next.difference(&current).cloned().collect(),
                        removed: current.difference(&next).cloned().collect(),
                        ..Default::default()
                    };

                    if !current.is_empty() {
                        for locale_id in &outcome.added {
                            outcome.restored += KeyTranslationRepository::restore_for_app_locale(
                                &app, locale_id, txn,
                            )
                            .await?;
                        }
                    }

                    let now = Utc::now();
                    for locale_id in &outcome.removed {
                        outcome.soft_deleted +=
                            KeyTranslationRepository::soft_delete_for_app_locale(
                                &app, locale_id, now, txn,
                            )
                            .await?;
                    }
                    Ok(outcome)
                })
            })
            .await
            .map_err(StorageError::from)?;

        self.aggregator
            .invalidate_many(app_name, outcome.touched())
            .await;

        info!(
            app = app_name,
            added = ?outcome.added,
            removed = ?outcome.removed,
            restored = outcome.restored,
            soft_deleted = outcome.soft_deleted,
            "app locales replaced"
        );
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touched_locales() {
        let outcome = LocaleSyncOutcome {
            added: vec!["de".into()],
            removed: vec!["fr".into(), "nl".into()],
            ..Default::default()
        };
        let touched: Vec<&String> = outcome.touched().collect();
        assert_eq!(touched, vec!["de", "fr", "nl"]);
    }
}
