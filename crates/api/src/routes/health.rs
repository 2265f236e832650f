use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok` when the database is reachable and a catalog resolves.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Tier the template catalog resolved from (`store` or `builtin`),
    /// `null` when no source produced one.
    pub catalog_tier: Option<&'static str>,
    pub catalog_size: usize,
    /// Whether recordings are archived to object storage.
    pub storage_configured: bool,
}

/// GET /health -- database reachability, catalog tier and storage wiring.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = grow_db::health_check(&state.pool).await.is_ok();

    let (catalog_tier, catalog_size) = match state.suggester.catalog().load_catalog().await {
        Ok(catalog) => (Some(catalog.tier().as_str()), catalog.len()),
        Err(e) => {
            tracing::warn!(error = %e, "Health check could not resolve a template catalog");
            (None, 0)
        }
    };

    let status = if db_healthy && catalog_tier.is_some() {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        catalog_tier,
        catalog_size,
        storage_configured: state.storage.is_some(),
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
