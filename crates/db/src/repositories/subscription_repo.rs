//! Repository for the `subscriptions` table.

use sqlx::PgPool;

use crate::models::subscription::{CreateSubscription, Subscription};

/// Column list for `subscriptions` queries.
const COLUMNS: &str = "id, uuid, email, source, status, created_at, updated_at";

/// Provides lookup and insert operations for email subscriptions.
pub struct SubscriptionRepo;

impl SubscriptionRepo {
    /// Find a subscription by (normalized) email.
    pub async fn find_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<Subscription>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subscriptions WHERE email = $1");
        sqlx::query_as::<_, Subscription>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new active subscription.
    ///
    /// Returns `None` when the email is already subscribed, so concurrent
    /// duplicate submissions resolve to a single row without an error.
    pub async fn create(
        pool: &PgPool,
        input: &CreateSubscription,
    ) -> Result<Option<Subscription>, sqlx::Error> {
        let query = format!(
            "INSERT INTO subscriptions (email, source, status) \
             VALUES ($1, $2, 'active') \
             ON CONFLICT ON CONSTRAINT uq_subscriptions_email DO NOTHING \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subscription>(&query)
            .bind(&input.email)
            .bind(&input.source)
            .fetch_optional(pool)
            .await
    }

    /// Count all subscriptions with the given email.
    pub async fn count_by_email(pool: &PgPool, email: &str) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM subscriptions WHERE email = $1")
            .bind(email)
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
