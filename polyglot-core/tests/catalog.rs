mod common;

use chrono::Duration;
use common::{seed_app, seed_key, setup};
use polyglot_error::service::ServiceError;
use polyglot_models::{
    domain::prelude::{
        CategoryPageParams, KeyPageParams, NewCategory, NewKey, NewKeyTranslation, PageParams,
        UpdateCategory, UpdateKey, UpdateKeyTranslation,
    },
    entities::prelude::Key,
    enums::common::{TerritoryType, ValueType},
};
use sea_orm::{ConnectionTrait, EntityTrait};

fn new_category(name: &str) -> NewCategory {
    NewCategory {
        name: name.into(),
        disabled_at: None,
    }
}

#[tokio::test]
async fn test_category_lookup_is_cached_and_filtered() {
    let ctx = setup().await;
    let s = &ctx.services;
    s.categories.create(new_category("Errors")).await.unwrap();
    s.categories.create(new_category("Navigation")).await.unwrap();

    let writes = ctx.cache.writes();
    let all = s.categories.lookup(None).await.unwrap();
    let filtered = s.categories.lookup(Some(" nav")).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "Navigation");
    assert_eq!(ctx.cache.writes(), writes + 1);

    // Any mutation forces exactly one fresh query
    s.categories.create(new_category("Forms")).await.unwrap();
    assert_eq!(s.categories.lookup(None).await.unwrap().len(), 3);
    assert_eq!(s.categories.lookup(None).await.unwrap().len(), 3);
    assert_eq!(ctx.cache.writes(), writes + 2);
}

#[tokio::test]
async fn test_category_conflicts_and_out_of_sync() {
    let ctx = setup().await;
    let s = &ctx.services;
    seed_app(s, "shop", &["en"]).await;
    seed_key(s, "shop", None, "title", &[("en", "Shop")]).await;
    let errors = s.categories.create(new_category("Errors")).await.unwrap();
    let forms = s.categories.create(new_category("Forms")).await.unwrap();

    assert!(matches!(
        s.categories.create(new_category("Errors")).await,
        Err(ServiceError::Conflict(_))
    ));
    assert!(matches!(
        s.categories.create(new_category("title")).await,
        Err(ServiceError::Conflict(_))
    ));

    let stale = UpdateCategory {
        id: errors.id,
        name: "Failures".into(),
        disabled_at: None,
        updated_at: errors.updated_at - Duration::seconds(10),
    };
    assert!(matches!(
        s.categories.update(stale).await,
        Err(ServiceError::OutOfSync(_))
    ));

    let taken = UpdateCategory {
        id: errors.id,
        name: "Forms".into(),
        disabled_at: None,
        updated_at: errors.updated_at,
    };
    assert!(matches!(
        s.categories.update(taken).await,
        Err(ServiceError::Conflict(_))
    ));

    let renamed = s
        .categories
        .update(UpdateCategory {
            id: errors.id,
            name: "Failures".into(),
            disabled_at: None,
            updated_at: errors.updated_at,
        })
        .await
        .unwrap();
    assert_eq!(renamed.name, "Failures");
    assert!(renamed.updated_at >= errors.updated_at);

    s.categories.delete(forms.id).await.unwrap();
    assert!(matches!(
        s.categories.find(forms.id).await,
        Err(ServiceError::NotFound(_))
    ));
    assert!(s.categories.restore(forms.id).await.is_ok());
    assert!(matches!(
        s.categories.restore(forms.id).await,
        Err(ServiceError::Conflict(_))
    ));
}

#[tokio::test]
async fn test_category_page_hides_deleted_unless_asked() {
    let ctx = setup().await;
    let s = &ctx.services;
    for name in ["A", "B", "C"] {
        s.categories.create(new_category(name)).await.unwrap();
    }
    let b = s.categories.lookup(Some("b")).await.unwrap();
    s.categories.delete(b[0].id).await.unwrap();

    let page = s
        .categories
        .page(CategoryPageParams {
            page: PageParams::new(1, 2),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.total, 2);
    assert_eq!(page.pages, 1);

    let page = s
        .categories
        .page(CategoryPageParams {
            with_deleted: true,
            page: PageParams::new(2, 2),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.total, 3);
    assert_eq!(page.records.len(), 1);
}

#[tokio::test]
async fn test_deleting_a_category_invalidates_translation_trees() {
    let ctx = setup().await;
    let s = &ctx.services;
    seed_app(s, "shop", &["en"]).await;
    let errors = s.categories.create(new_category("Errors")).await.unwrap();
    seed_key(s, "shop", Some(errors.id), "not_found", &[("en", "Not found")]).await;
    seed_key(s, "shop", None, "title", &[("en", "Shop")]).await;

    let tree = s.translations.translations("shop", "en").await.unwrap();
    assert!(tree.contains_key("errors"));

    s.categories.delete(errors.id).await.unwrap();
    let tree = s.translations.translations("shop", "en").await.unwrap();
    assert!(!tree.contains_key("errors"));
    assert!(tree.contains_key("title"));
}

#[tokio::test]
async fn test_key_validation_and_conflicts() {
    let ctx = setup().await;
    let s = &ctx.services;
    seed_app(s, "shop", &["en", "de"]).await;
    s.categories.create(new_category("Errors")).await.unwrap();
    seed_key(s, "shop", None, "title", &[("en", "Shop"), ("de", "Laden")]).await;

    let key = |name: &str, translations: &[(&str, &str)]| NewKey {
        app_name: "shop".into(),
        category_id: None,
        name: name.into(),
        description: None,
        disabled_at: None,
        translations: translations
            .iter()
            .map(|(locale, value)| NewKeyTranslation {
                locale_id: locale.to_string(),
                value_type: ValueType::Text,
                value: value.to_string(),
            })
            .collect(),
    };

    let cases = [
        (key("title", &[("en", "x"), ("de", "y")]), "conflict"),
        (key("Errors", &[("en", "x"), ("de", "y")]), "conflict"),
        (key("subtitle", &[("en", "x")]), "invalid"),
        (key("subtitle", &[("en", "x"), ("en", "y")]), "invalid"),
        (key("subtitle", &[("en", "x"), ("de", "y"), ("nl", "z")]), "invalid"),
        (key("subtitle", &[]), "invalid"),
    ];
    for (new_key, code) in cases {
        let name = new_key.name.clone();
        let err = s.keys.create(new_key).await.unwrap_err();
        assert_eq!(err.code(), code, "{name}: {err}");
    }

    let mut unknown_app = key("subtitle", &[("en", "x"), ("de", "y")]);
    unknown_app.app_name = "blog".into();
    assert!(matches!(
        s.keys.create(unknown_app).await,
        Err(ServiceError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_key_update_checks_every_timestamp() {
    let ctx = setup().await;
    let s = &ctx.services;
    seed_app(s, "shop", &["en", "de"]).await;
    let key = seed_key(s, "shop", None, "title", &[("en", "Shop"), ("de", "Laden")]).await;
    let info = s.keys.find(key.id).await.unwrap();

    let update = |key_seen, en_seen, de_seen| UpdateKey {
        id: key.id,
        category_id: None,
        name: "title".into(),
        description: Some("Page title".into()),
        disabled_at: None,
        updated_at: key_seen,
        translations: vec![
            UpdateKeyTranslation {
                locale_id: "en".into(),
                value_type: ValueType::Text,
                value: "Store".into(),
                updated_at: en_seen,
            },
            UpdateKeyTranslation {
                locale_id: "de".into(),
                value_type: ValueType::Text,
                value: "Geschäft".into(),
                updated_at: de_seen,
            },
        ],
    };
    let seen = |locale: &str| {
        info.translations
            .iter()
            .find(|t| t.locale_id == locale)
            .map(|t| t.updated_at)
    };

    let stale_key = info.key.updated_at - Duration::seconds(5);
    assert!(matches!(
        s.keys.update(update(stale_key, seen("en"), seen("de"))).await,
        Err(ServiceError::OutOfSync(_))
    ));
    assert!(matches!(
        s.keys.update(update(info.key.updated_at, seen("en"), None)).await,
        Err(ServiceError::OutOfSync(_))
    ));

    s.keys
        .update(update(info.key.updated_at, seen("en"), seen("de")))
        .await
        .unwrap();
    let info = s.keys.find(key.id).await.unwrap();
    assert_eq!(info.key.description.as_deref(), Some("Page title"));
    assert!(info.translations.iter().any(|t| t.value == "Geschäft"));
}

#[tokio::test]
async fn test_key_delete_restore_and_page() {
    let ctx = setup().await;
    let s = &ctx.services;
    seed_app(s, "shop", &["en"]).await;
    let title = seed_key(s, "shop", None, "title", &[("en", "Shop")]).await;
    seed_key(s, "shop", None, "subtitle", &[("en", "Everything")]).await;

    s.keys.delete(title.id).await.unwrap();
    assert!(matches!(s.keys.find(title.id).await, Err(ServiceError::NotFound(_))));

    let page = s
        .keys
        .page(KeyPageParams {
            app_name: Some("shop".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.records[0].name, "subtitle");

    s.keys.restore(title.id).await.unwrap();
    assert!(matches!(
        s.keys.restore(title.id).await,
        Err(ServiceError::Conflict(_))
    ));
    let tree = s.translations.translations("shop", "en").await.unwrap();
    assert_eq!(tree.len(), 2);
}

#[tokio::test]
async fn test_key_delete_and_restore_survive_failed_invalidation() {
    let ctx = setup().await;
    let s = &ctx.services;
    seed_app(s, "shop", &["en"]).await;
    let key = seed_key(s, "shop", None, "title", &[("en", "Shop")]).await;

    // Listing the app's locales for invalidation now fails
    ctx.db
        .execute_unprepared(r#"ALTER TABLE "app_locale" RENAME TO "app_locale_moved""#)
        .await
        .unwrap();

    s.keys.delete(key.id).await.unwrap();
    let stored = Key::find_by_id(key.id).one(&ctx.db).await.unwrap().unwrap();
    assert!(stored.deleted_at.is_some());

    let restored = s.keys.restore(key.id).await.unwrap();
    assert!(restored.deleted_at.is_none());
}

#[tokio::test]
async fn test_locale_and_territory_lookups() {
    let ctx = setup().await;
    let s = &ctx.services;

    assert!(s.locales.is_available("az-Arab").await.unwrap());
    assert!(!s.locales.is_available("az-Arab-IQ").await.unwrap());
    assert_eq!(s.locales.resolve("az-Arab-IQ").await.unwrap(), "az-Arab");
    assert!(matches!(
        s.locales.resolve("fr-CA").await,
        Err(ServiceError::NotFound(_))
    ));

    // en-US resolves to en and shares its entry
    let writes = ctx.cache.writes();
    let names = s.locales.lookup("en", None).await.unwrap();
    assert_eq!(names.len(), 4);
    assert_eq!(names[0].name, "Azerbaijani");
    let filtered = s.locales.lookup("en-US", Some("GER")).await.unwrap();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, "de");
    assert_eq!(ctx.cache.writes(), writes + 1);

    let countries = s
        .territories
        .lookup("en-US", Some(TerritoryType::Country), None)
        .await
        .unwrap();
    assert_eq!(countries.len(), 3);
    let all = s.territories.lookup("en", None, Some("euro")).await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, "150");
    assert_eq!(all[0].territory_type, TerritoryType::Numeric);
}
