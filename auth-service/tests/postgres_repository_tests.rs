//! Run with a reachable Postgres: `DATABASE_URL=... cargo test -- --ignored`

mod common;

use auth_service::domain::user::errors::AuthError;
use auth_service::domain::user::models::EmailAddress;
use auth_service::domain::user::models::User;
use auth_service::domain::user::models::UserId;
use auth_service::domain::user::ports::UserRepository;
use auth_service::outbound::repositories::PostgresUserRepository;
use chrono::SubsecRound;
use chrono::Utc;
use common::TestDb;

fn user(email: &str, password_hash: &str) -> User {
    User {
        id: UserId::new(),
        email: EmailAddress::new(email.to_string()).unwrap(),
        password_hash: password_hash.to_string(),
        // Postgres keeps microseconds
        created_at: Utc::now().trunc_subsecs(6),
    }
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_create_and_find() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    let created = repository
        .create(user("a@x.com", "$argon2id$hash"))
        .await
        .expect("Failed to create user");

    let by_id = repository
        .find_by_id(&created.id)
        .await
        .unwrap()
        .expect("User not found by id");
    let by_email = repository
        .find_by_email("a@x.com")
        .await
        .unwrap()
        .expect("User not found by email");

    assert_eq!(by_id, created);
    assert_eq!(by_email, created);
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_missing_user_is_none() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    assert!(repository.find_by_id(&UserId::new()).await.unwrap().is_none());
    assert!(repository
        .find_by_email("nobody@x.com")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_duplicate_email_keeps_existing_record() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    let original = repository
        .create(user("a@x.com", "original-hash"))
        .await
        .expect("Failed to create user");

    let result = repository.create(user("a@x.com", "other-hash")).await;

    assert_eq!(result, Err(AuthError::DuplicateUser("a@x.com".to_string())));

    let stored = repository
        .find_by_email("a@x.com")
        .await
        .unwrap()
        .expect("User not found");
    assert_eq!(stored, original);
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_email_lookup_is_case_sensitive() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());

    repository
        .create(user("Alice@x.com", "hash"))
        .await
        .expect("Failed to create user");

    assert!(repository
        .find_by_email("alice@x.com")
        .await
        .unwrap()
        .is_none());

    // A differently cased address is a different user
    assert!(repository.create(user("alice@x.com", "hash")).await.is_ok());
}

#[tokio::test]
#[ignore = "requires Postgres"]
async fn test_stored_email_read_back_verbatim() {
    let db = TestDb::new().await;
    let repository = PostgresUserRepository::new(db.pool.clone());
    let id = UserId::new();

    sqlx::query("INSERT INTO users (id, email, password_hash) VALUES ($1, $2, $3)")
        .bind(id.0)
        .bind("legacy-address")
        .bind("hash")
        .execute(&db.pool)
        .await
        .expect("Failed to insert row");

    let stored = repository
        .find_by_id(&id)
        .await
        .expect("Stored row unreadable")
        .expect("User not found");

    assert_eq!(stored.email.as_str(), "legacy-address");
}
