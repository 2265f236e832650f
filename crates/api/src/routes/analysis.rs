//! Route definitions for image and content analysis.

use axum::routing::post;
use axum::Router;

use crate::handlers::analysis;
use crate::state::AppState;

/// Analysis routes, merged at the `/api/v1` root.
///
/// ```text
/// POST   /analyze-image     -> analyze_image
/// POST   /analyze-content   -> analyze_content
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/analyze-image", post(analysis::analyze_image))
        .route("/analyze-content", post(analysis::analyze_content))
}
