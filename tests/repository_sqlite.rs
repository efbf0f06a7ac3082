mod common;

use std::collections::HashSet;
use std::sync::Arc;
use url_shortener::domain::repositories::{UrlDeleter, UrlReader, UrlSaver};
use url_shortener::error::StorageError;
use url_shortener::infrastructure::persistence::{SqliteSettings, SqliteUrlRepository};

#[tokio::test]
async fn test_save_then_get_returns_exact_url() {
    let db = common::open_test_db().await;
    let url = "https://Example.COM:443/a/../b?q=1&Q=2#Frag";

    let id = db.repo.save_url(url, "ab12cd").await.unwrap();
    assert_eq!(id, 1);

    let stored = db.repo.get_url("ab12cd").await.unwrap();
    assert_eq!(stored, url);
}

#[tokio::test]
async fn test_save_duplicate_alias_fails_with_alias_exists() {
    let db = common::open_test_db().await;

    db.repo
        .save_url("https://example.com/a", "ab12cd")
        .await
        .unwrap();
    let result = db.repo.save_url("https://example.com/b", "ab12cd").await;

    assert!(matches!(result, Err(StorageError::AliasExists { alias }) if alias == "ab12cd"));
    assert_eq!(
        db.repo.get_url("ab12cd").await.unwrap(),
        "https://example.com/a"
    );
}

#[tokio::test]
async fn test_get_missing_alias_fails_with_not_found() {
    let db = common::open_test_db().await;

    let result = db.repo.get_url("missing").await;

    assert!(matches!(result, Err(StorageError::NotFound { .. })));
}

#[tokio::test]
async fn test_delete_missing_alias_fails_with_not_found() {
    let db = common::open_test_db().await;

    let result = db.repo.delete_url("missing").await;

    assert!(matches!(result, Err(StorageError::NotFound { .. })));
}

#[tokio::test]
async fn test_delete_then_get_fails_with_not_found() {
    let db = common::open_test_db().await;
    db.repo
        .save_url("https://example.com/a", "ab12cd")
        .await
        .unwrap();

    db.repo.delete_url("ab12cd").await.unwrap();

    assert!(matches!(
        db.repo.get_url("ab12cd").await,
        Err(StorageError::NotFound { .. })
    ));
    assert!(matches!(
        db.repo.delete_url("ab12cd").await,
        Err(StorageError::NotFound { .. })
    ));
}

#[tokio::test]
async fn test_deleted_alias_can_be_saved_again() {
    let db = common::open_test_db().await;
    db.repo
        .save_url("https://example.com/a", "ab12cd")
        .await
        .unwrap();
    db.repo.delete_url("ab12cd").await.unwrap();

    db.repo
        .save_url("https://example.com/b", "ab12cd")
        .await
        .unwrap();

    assert_eq!(
        db.repo.get_url("ab12cd").await.unwrap(),
        "https://example.com/b"
    );
}

#[tokio::test]
async fn test_ids_are_monotonic_and_never_reused() {
    let db = common::open_test_db().await;

    let first = db.repo.save_url("https://example.com/1", "one").await.unwrap();
    let second = db.repo.save_url("https://example.com/2", "two").await.unwrap();
    assert!(second > first);

    db.repo.delete_url("two").await.unwrap();
    let third = db
        .repo
        .save_url("https://example.com/3", "three")
        .await
        .unwrap();

    assert!(third > second);
}

#[tokio::test]
async fn test_aliases_are_case_sensitive() {
    let db = common::open_test_db().await;

    db.repo.save_url("https://example.com/lower", "abc").await.unwrap();
    db.repo.save_url("https://example.com/upper", "ABC").await.unwrap();

    assert_eq!(db.repo.get_url("abc").await.unwrap(), "https://example.com/lower");
    assert_eq!(db.repo.get_url("ABC").await.unwrap(), "https://example.com/upper");
}

#[tokio::test]
async fn test_init_schema_is_idempotent_and_keeps_data() {
    let db = common::open_test_db().await;
    db.repo
        .save_url("https://example.com/a", "keep")
        .await
        .unwrap();

    db.repo.init_schema().await.unwrap();
    db.repo.init_schema().await.unwrap();
    db.repo.close().await;

    let reopened = SqliteUrlRepository::open(db.path(), &SqliteSettings::default())
        .await
        .unwrap();

    assert_eq!(
        reopened.get_url("keep").await.unwrap(),
        "https://example.com/a"
    );
    assert_eq!(reopened.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_ping_and_count() {
    let db = common::open_test_db().await;

    db.repo.ping().await.unwrap();
    assert_eq!(db.repo.count().await.unwrap(), 0);

    db.repo.save_url("https://example.com/a", "a").await.unwrap();
    db.repo.save_url("https://example.com/b", "b").await.unwrap();
    assert_eq!(db.repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_closed_pool_reports_unavailable() {
    let db = common::open_test_db().await;
    db.repo.close().await;

    let result = db.repo.get_url("ab12cd").await;

    assert!(matches!(result, Err(StorageError::Unavailable(_))));
}

#[tokio::test]
async fn test_save_on_closed_pool_reports_unavailable() {
    let db = common::open_test_db().await;
    db.repo.close().await;

    let result = db.repo.save_url("https://example.com/a", "ab12cd").await;

    assert!(matches!(result, Err(StorageError::Unavailable(_))));
}

#[tokio::test]
async fn test_delete_on_closed_pool_reports_unavailable() {
    let db = common::open_test_db().await;
    db.repo
        .save_url("https://example.com/a", "ab12cd")
        .await
        .unwrap();
    db.repo.close().await;

    let result = db.repo.delete_url("ab12cd").await;

    assert!(matches!(result, Err(StorageError::Unavailable(_))));

    let reopened = SqliteUrlRepository::open(db.path(), &SqliteSettings::default())
        .await
        .unwrap();
    assert_eq!(
        reopened.get_url("ab12cd").await.unwrap(),
        "https://example.com/a"
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_saves_with_distinct_aliases_all_succeed() {
    let db = common::open_test_db().await;

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let repo = Arc::clone(&db.repo);
            tokio::spawn(async move {
                let alias = format!("alias{i}");
                let url = format!("https://example.com/{i}");
                repo.save_url(&url, &alias).await
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        ids.insert(handle.await.unwrap().unwrap());
    }
    assert_eq!(ids.len(), 32);

    for i in 0..32 {
        let url = db.repo.get_url(&format!("alias{i}")).await.unwrap();
        assert_eq!(url, format!("https://example.com/{i}"));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_saves_on_same_alias_yield_one_success() {
    let db = common::open_test_db().await;

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let repo = Arc::clone(&db.repo);
            tokio::spawn(async move {
                repo.save_url(&format!("https://example.com/{i}"), "contended")
                    .await
            })
        })
        .collect();

    let mut successes = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(StorageError::AliasExists { .. }) => conflicts += 1,
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(conflicts, 15);
    assert_eq!(db.repo.count().await.unwrap(), 1);
}
