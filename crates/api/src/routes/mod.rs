pub mod analysis;
pub mod health;
pub mod subscriptions;
pub mod templates;
pub mod transcription;
pub mod workflows;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /analyze-image                 classify one image (POST)
/// /analyze-content               suggest templates for content (POST)
///
/// /templates                     list catalog
/// /templates/{id}                get one template
///
/// /workflows                     instantiate a template (POST)
///
/// /subscribe                     email subscription (POST)
///
/// /transcribe                    archive and transcribe a recording (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(analysis::router())
        .nest("/templates", templates::router())
        .nest("/workflows", workflows::router())
        .merge(subscriptions::router())
        .merge(transcription::router())
}
