use axum::routing::post;
use axum::Router;

use crate::handlers::transcription;
use crate::state::AppState;

/// ```text
/// POST   /transcribe        -> transcribe
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/transcribe", post(transcription::transcribe))
}
