use axum::routing::post;
use axum::Router;

use crate::handlers::workflows;
use crate::state::AppState;

/// Workflow routes mounted at `/workflows`.
///
/// ```text
/// POST   /                  -> create_workflow
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(workflows::create_workflow))
}
