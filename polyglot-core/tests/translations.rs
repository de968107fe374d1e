mod common;

use chrono::Utc;
use common::{seed_app, seed_key, setup};
use polyglot_error::service::ServiceError;
use polyglot_models::{
    domain::prelude::{NewCategory, UpdateKey, UpdateKeyTranslation},
    enums::common::ValueType,
};
use serde_json::json;

#[tokio::test]
async fn test_tree_nests_categories_and_camel_cases_names() {
    let ctx = setup().await;
    let s = &ctx.services;
    seed_app(s, "shop", &["en", "de"]).await;
    let errors = s
        .categories
        .create(NewCategory {
            name: "Errors".into(),
            disabled_at: None,
        })
        .await
        .unwrap();
    seed_key(s, "shop", Some(errors.id), "not_found", &[("en", "Not found"), ("de", "Nicht gefunden")]).await;
    seed_key(s, "shop", None, "Welcome", &[("en", "Welcome"), ("de", "Willkommen")]).await;

    let tree = s.translations.translations("shop", "en").await.unwrap();
    assert_eq!(
        serde_json::to_value(&tree).unwrap(),
        json!({"errors": {"notFound": "Not found"}, "welcome": "Welcome"})
    );

    // de-DE is not stored and falls back to de
    let tree = s.translations.translations("shop", "de-DE").await.unwrap();
    assert_eq!(
        serde_json::to_value(&tree).unwrap(),
        json!({"errors": {"notFound": "Nicht gefunden"}, "welcome": "Willkommen"})
    );
}

#[tokio::test]
async fn test_locale_added_later_yields_null_leaves() {
    let ctx = setup().await;
    let s = &ctx.services;
    seed_app(s, "shop", &["en"]).await;
    seed_key(s, "shop", None, "sign_in", &[("en", "Sign in")]).await;

    s.apps
        .set_locales(polyglot_models::domain::prelude::SetAppLocales {
            app_name: "shop".into(),
            locales: vec!["en".into(), "nl".into()],
        })
        .await
        .unwrap();

    let tree = s.translations.translations("shop", "nl").await.unwrap();
    assert_eq!(serde_json::to_value(&tree).unwrap(), json!({"signIn": null}));
}

#[tokio::test]
async fn test_disabled_and_deleted_entries_are_hidden() {
    let ctx = setup().await;
    let s = &ctx.services;
    seed_app(s, "shop", &["en"]).await;
    let hidden = s
        .categories
        .create(NewCategory {
            name: "Hidden".into(),
            disabled_at: Some(Utc::now()),
        })
        .await
        .unwrap();
    seed_key(s, "shop", Some(hidden.id), "secret", &[("en", "Secret")]).await;
    seed_key(s, "shop", None, "visible", &[("en", "Visible")]).await;
    let gone = seed_key(s, "shop", None, "gone", &[("en", "Gone")]).await;
    s.keys.delete(gone.id).await.unwrap();

    let tree = s.translations.translations("shop", "en").await.unwrap();
    assert_eq!(serde_json::to_value(&tree).unwrap(), json!({"visible": "Visible"}));
}

#[tokio::test]
async fn test_tree_is_cached_until_a_translation_changes() {
    let ctx = setup().await;
    let s = &ctx.services;
    seed_app(s, "shop", &["en"]).await;
    let key = seed_key(s, "shop", None, "title", &[("en", "Shop")]).await;

    let writes = ctx.cache.writes();
    let first = s.translations.translations("shop", "en").await.unwrap();
    let second = s.translations.translations("shop", "en").await.unwrap();
    assert_eq!(first, second);
    assert_eq!(ctx.cache.writes(), writes + 1);

    let info = s.keys.find(key.id).await.unwrap();
    let translation = &info.translations[0];
    s.keys
        .update(UpdateKey {
            id: key.id,
            category_id: None,
            name: "title".into(),
            description: None,
            disabled_at: None,
            updated_at: info.key.updated_at,
            translations: vec![UpdateKeyTranslation {
                locale_id: "en".into(),
                value_type: ValueType::Text,
                value: "Store".into(),
                updated_at: Some(translation.updated_at),
            }],
        })
        .await
        .unwrap();

    let tree = s.translations.translations("shop", "en").await.unwrap();
    assert_eq!(serde_json::to_value(&tree).unwrap(), json!({"title": "Store"}));
    assert_eq!(ctx.cache.writes(), writes + 2);
}

#[tokio::test]
async fn test_unknown_app_tag_or_locale_is_not_found() {
    let ctx = setup().await;
    let s = &ctx.services;
    seed_app(s, "shop", &["en"]).await;

    for (app, tag) in [("nope", "en"), ("shop", "fr-CA"), ("shop", "de"), ("shop", "")] {
        let err = s.translations.translations(app, tag).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)), "{app} {tag}: {err}");
    }
}

#[tokio::test]
async fn test_drop_all_invalidates_every_association() {
    let ctx = setup().await;
    let s = &ctx.services;
    seed_app(s, "shop", &["en", "de"]).await;
    seed_app(s, "blog", &["en"]).await;
    seed_key(s, "shop", None, "title", &[("en", "Shop"), ("de", "Laden")]).await;
    seed_key(s, "blog", None, "title", &[("en", "Blog")]).await;

    for (app, tag) in [("shop", "en"), ("shop", "de"), ("blog", "en")] {
        s.translations.translations(app, tag).await.unwrap();
    }
    let writes = ctx.cache.writes();

    assert_eq!(s.translations.drop_all().await.unwrap(), 3);

    for (app, tag) in [("shop", "en"), ("shop", "de"), ("blog", "en")] {
        s.translations.translations(app, tag).await.unwrap();
    }
    assert_eq!(ctx.cache.writes(), writes + 3);
}
