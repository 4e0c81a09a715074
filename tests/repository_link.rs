use link_cloner::domain::entities::NewLink;
use link_cloner::domain::repositories::LinkRepository;
use link_cloner::infrastructure::persistence::PgLinkRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_link(id: &str, target: &str) -> NewLink {
    NewLink {
        id: id.to_string(),
        target: target.to_string(),
        tracking_id: Some("spring".to_string()),
        use_alt_domain: false,
        add_utm: true,
        apply_mask: true,
    }
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_save_and_find(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let saved = repo
        .save(new_link("abcd1234", "https://example.com"))
        .await
        .unwrap();

    assert_eq!(saved.id, "abcd1234");
    assert_eq!(saved.tracking_id.as_deref(), Some("spring"));

    let found = repo.find_by_id("abcd1234").await.unwrap().unwrap();

    assert_eq!(found.target, "https://example.com");
    assert!(found.add_utm);
    assert!(found.apply_mask);
    assert!(!found.use_alt_domain);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_find_not_found(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.find_by_id("missing1").await.unwrap().is_none());
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_save_replaces_existing_id(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    repo.save(new_link("abcd1234", "https://first.example.com"))
        .await
        .unwrap();
    repo.save(new_link("abcd1234", "https://second.example.com"))
        .await
        .unwrap();

    let found = repo.find_by_id("abcd1234").await.unwrap().unwrap();

    assert_eq!(found.target, "https://second.example.com");
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_exists_and_count(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(!repo.exists("abcd1234").await.unwrap());
    assert_eq!(repo.count().await.unwrap(), 0);

    repo.save(new_link("abcd1234", "https://example.com"))
        .await
        .unwrap();

    assert!(repo.exists("abcd1234").await.unwrap());
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[sqlx::test]
#[ignore = "requires DATABASE_URL"]
async fn test_health_check(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.health_check().await);
}
