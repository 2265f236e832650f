//! Email subscription model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use grow_core::types::{DbId, Timestamp};

/// A row from the `subscriptions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: DbId,
    pub uuid: uuid::Uuid,
    pub email: String,
    pub source: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Validated input for inserting a subscription.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubscription {
    /// Normalized (trimmed, lowercased) address.
    pub email: String,
    pub source: String,
}
