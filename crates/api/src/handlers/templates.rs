//! Handlers for the template catalog.
//!
//! The catalog is read through the same two-tier source the suggester
//! uses, so these endpoints keep working when the template table is down.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use grow_core::error::CoreError;
use grow_pipeline::PipelineError;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/templates
pub async fn list_templates(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let catalog = state
        .suggester
        .catalog()
        .load_catalog()
        .await
        .map_err(PipelineError::from)?;

    Ok(Json(DataResponse {
        data: catalog.templates().to_vec(),
    }))
}

/// GET /api/v1/templates/{id}
pub async fn get_template(
    State(state): State<AppState>,
    Path(template_id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let catalog = state
        .suggester
        .catalog()
        .load_catalog()
        .await
        .map_err(PipelineError::from)?;

    let template = catalog
        .get(&template_id)
        .cloned()
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Template",
            id: template_id,
        }))?;

    Ok(Json(DataResponse { data: template }))
}
