mod common;

use common::{seed_app, seed_key, setup};
use polyglot_error::service::ServiceError;
use polyglot_models::{domain::prelude::SetAppLocales, entities::prelude::KeyTranslation};
use polyglot_repository::AppRepository;
use sea_orm::{ConnectionTrait, EntityTrait};
use serde_json::json;

fn locales(app: &str, ids: &[&str]) -> SetAppLocales {
    SetAppLocales {
        app_name: app.into(),
        locales: ids.iter().map(|id| id.to_string()).collect(),
    }
}

#[tokio::test]
async fn test_removed_locale_is_soft_deleted_and_restored_with_its_value() {
    let ctx = setup().await;
    let s = &ctx.services;
    seed_app(s, "shop", &["en", "de"]).await;
    let key = seed_key(s, "shop", None, "welcome", &[("en", "Welcome"), ("de", "Willkommen")]).await;

    let outcome = s.apps.set_locales(locales("shop", &["en"])).await.unwrap();
    assert_eq!(outcome.removed, vec!["de".to_string()]);
    assert!(outcome.added.is_empty());
    assert_eq!(outcome.soft_deleted, 1);

    let info = s.keys.find(key.id).await.unwrap();
    assert_eq!(info.translations.len(), 1);
    assert_eq!(info.translations[0].locale_id, "en");
    assert!(matches!(
        s.translations.translations("shop", "de").await,
        Err(ServiceError::NotFound(_))
    ));

    let outcome = s.apps.set_locales(locales("shop", &["en", "de"])).await.unwrap();
    assert_eq!(outcome.added, vec!["de".to_string()]);
    assert_eq!(outcome.restored, 1);

    let info = s.keys.find(key.id).await.unwrap();
    let de = info
        .translations
        .iter()
        .find(|t| t.locale_id == "de")
        .unwrap();
    assert_eq!(de.value, "Willkommen");

    let tree = s.translations.translations("shop", "de").await.unwrap();
    assert_eq!(serde_json::to_value(&tree).unwrap(), json!({"welcome": "Willkommen"}));
}

#[tokio::test]
async fn test_locale_changes_drop_cached_trees() {
    let ctx = setup().await;
    let s = &ctx.services;
    seed_app(s, "shop", &["en", "de"]).await;
    seed_key(s, "shop", None, "title", &[("en", "Shop"), ("de", "Laden")]).await;

    let tree = s.translations.translations("shop", "de").await.unwrap();
    assert_eq!(serde_json::to_value(&tree).unwrap(), json!({"title": "Laden"}));

    s.apps.set_locales(locales("shop", &["en"])).await.unwrap();
    seed_key(s, "shop", None, "extra", &[("en", "Extra")]).await;
    s.apps.set_locales(locales("shop", &["en", "de"])).await.unwrap();

    let writes = ctx.cache.writes();
    let tree = s.translations.translations("shop", "de").await.unwrap();
    assert_eq!(
        serde_json::to_value(&tree).unwrap(),
        json!({"extra": null, "title": "Laden"})
    );
    assert_eq!(ctx.cache.writes(), writes + 1);
}

#[tokio::test]
async fn test_failure_rolls_back_the_whole_replacement() {
    let ctx = setup().await;
    let s = &ctx.services;
    seed_app(s, "shop", &["en", "de"]).await;
    seed_key(s, "shop", None, "welcome", &[("en", "Welcome"), ("de", "Willkommen")]).await;

    ctx.db
        .execute_unprepared(
            r#"
            CREATE TRIGGER "fail_de_soft_delete"
            BEFORE UPDATE OF "deleted_at" ON "key_translation"
            FOR EACH ROW
            WHEN NEW."locale_id" = 'de' AND NEW."deleted_at" IS NOT NULL
            BEGIN
                SELECT RAISE(ABORT, 'injected failure');
            END;
            "#,
        )
        .await
        .unwrap();

    let err = s
        .apps
        .set_locales(locales("shop", &["en", "nl"]))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Transient(_)), "{err}");

    assert_eq!(
        AppRepository::locale_ids("shop", &ctx.db).await.unwrap(),
        vec!["de".to_string(), "en".to_string()]
    );
    let translations = KeyTranslation::find().all(&ctx.db).await.unwrap();
    assert_eq!(translations.len(), 2);
    assert!(translations.iter().all(|t| t.deleted_at.is_none()));
}

#[tokio::test]
async fn test_first_assignment_skips_restore() {
    let ctx = setup().await;
    let s = &ctx.services;
    s.apps.create("shop").await.unwrap();

    let outcome = s.apps.set_locales(locales("shop", &["en", "en", " de "])).await.unwrap();
    assert_eq!(outcome.added, vec!["de".to_string(), "en".to_string()]);
    assert_eq!(outcome.restored, 0);
    assert_eq!(
        s.apps.locales("shop").await.unwrap().locales,
        vec!["de".to_string(), "en".to_string()]
    );
    assert!(s
        .apps
        .has_locales("shop", &["en".to_string()])
        .await
        .unwrap());
}

#[tokio::test]
async fn test_rejected_locale_sets() {
    let ctx = setup().await;
    let s = &ctx.services;
    seed_app(s, "shop", &["en"]).await;

    let err = s.apps.set_locales(locales("shop", &[])).await.unwrap_err();
    assert!(matches!(err, ServiceError::Invalid(_)));

    let err = s
        .apps
        .set_locales(locales("shop", &["en", "xx-YY"]))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(ref what) if what.contains("xx-YY")));

    let err = s.apps.set_locales(locales("nope", &["en"])).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    // Nothing changed
    assert_eq!(
        s.apps.locales("shop").await.unwrap().locales,
        vec!["en".to_string()]
    );
}

#[tokio::test]
async fn test_create_app_conflicts_on_duplicate() {
    let ctx = setup().await;
    let s = &ctx.services;
    s.apps.create("shop").await.unwrap();
    assert!(s.apps.exists("shop").await.unwrap());
    assert!(matches!(
        s.apps.create("shop").await,
        Err(ServiceError::Conflict(_))
    ));
    assert!(matches!(s.apps.create("  ").await, Err(ServiceError::Invalid(_))));
}
