use axum::routing::post;
use axum::Router;

use crate::handlers::subscriptions;
use crate::state::AppState;

/// ```text
/// POST   /subscribe         -> subscribe
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/subscribe", post(subscriptions::subscribe))
}
