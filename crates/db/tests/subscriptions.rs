//! Integration tests for the subscription repository.

use sqlx::PgPool;
use grow_db::models::subscription::CreateSubscription;
use grow_db::repositories::SubscriptionRepo;

fn new_subscription(email: &str) -> CreateSubscription {
    CreateSubscription {
        email: email.to_string(),
        source: "dragon-page".to_string(),
    }
}

#[sqlx::test]
async fn create_defaults_status_to_active(pool: PgPool) {
    let created = SubscriptionRepo::create(&pool, &new_subscription("ada@example.com"))
        .await
        .unwrap()
        .expect("first insert should create a row");

    assert_eq!(created.email, "ada@example.com");
    assert_eq!(created.source, "dragon-page");
    assert_eq!(created.status, "active");
}

#[sqlx::test]
async fn duplicate_email_returns_none(pool: PgPool) {
    let input = new_subscription("ada@example.com");
    SubscriptionRepo::create(&pool, &input).await.unwrap().unwrap();

    let second = SubscriptionRepo::create(&pool, &input).await.unwrap();
    assert!(second.is_none());

    let count = SubscriptionRepo::count_by_email(&pool, "ada@example.com")
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test]
async fn find_by_email_round_trip(pool: PgPool) {
    assert!(SubscriptionRepo::find_by_email(&pool, "grace@example.com")
        .await
        .unwrap()
        .is_none());

    let created = SubscriptionRepo::create(&pool, &new_subscription("grace@example.com"))
        .await
        .unwrap()
        .unwrap();
    let found = SubscriptionRepo::find_by_email(&pool, "grace@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, created.id);
    assert_eq!(found.uuid, created.uuid);
}

#[sqlx::test]
async fn status_check_constraint_rejects_unknown_status(pool: PgPool) {
    let result = sqlx::query(
        "INSERT INTO subscriptions (email, status) VALUES ('x@example.com', 'pending')",
    )
    .execute(&pool)
    .await;
    assert!(result.is_err());
}
