//! Handler for the email subscription form.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use grow_core::error::CoreError;
use grow_core::subscription::{normalize_email, resolve_source, validate_email};
use grow_db::models::subscription::{CreateSubscription, Subscription};
use grow_db::repositories::SubscriptionRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

pub const ALREADY_SUBSCRIBED: &str = "Email already subscribed";
pub const SUBSCRIBED: &str = "Successfully subscribed to updates!";

/// Request body for `POST /subscribe`.
#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub source: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SubscribeResponse {
    pub success: bool,
    pub message: &'static str,
    pub subscription: Subscription,
}

/// POST /api/v1/subscribe
///
/// Record an email subscription. Emails compare case-insensitively; a
/// second submission of the same address is a 409.
pub async fn subscribe(
    State(state): State<AppState>,
    Json(input): Json<SubscribeRequest>,
) -> AppResult<impl IntoResponse> {
    validate_email(&input.email)?;
    let email = normalize_email(&input.email);
    let source = resolve_source(input.source.as_deref())?;

    if SubscriptionRepo::find_by_email(&state.pool, &email)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            ALREADY_SUBSCRIBED.to_string(),
        )));
    }

    // A concurrent insert of the same address loses the race here.
    let subscription = SubscriptionRepo::create(&state.pool, &CreateSubscription { email, source })
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Conflict(ALREADY_SUBSCRIBED.to_string())))?;

    tracing::info!(
        subscription_id = subscription.id,
        source = %subscription.source,
        "Email subscribed"
    );

    Ok((
        StatusCode::CREATED,
        Json(SubscribeResponse {
            success: true,
            message: SUBSCRIBED,
            subscription,
        }),
    ))
}
