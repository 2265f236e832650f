//! Handlers for workflow instantiation.
//!
//! Workflows are built from a catalog template and returned to the caller;
//! they are not stored server-side.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use grow_core::error::CoreError;
use grow_core::workflow::{instantiate, validate_workflow_name};
use grow_pipeline::PipelineError;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /workflows`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkflowRequest {
    #[serde(default)]
    pub template_id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// POST /api/v1/workflows
///
/// Expand a template into a fresh checklist. A missing or blank name
/// defaults to `"{template name} - {date}"`.
pub async fn create_workflow(
    State(state): State<AppState>,
    Json(input): Json<CreateWorkflowRequest>,
) -> AppResult<impl IntoResponse> {
    let template_id = input.template_id.trim();
    if template_id.is_empty() {
        return Err(AppError::BadRequest("templateId is required".to_string()));
    }
    if let Some(name) = input.name.as_deref() {
        validate_workflow_name(name)?;
    }

    let catalog = state
        .suggester
        .catalog()
        .load_catalog()
        .await
        .map_err(PipelineError::from)?;
    let template = catalog.get(template_id).ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Template",
            id: template_id.to_string(),
        })
    })?;

    let workflow = instantiate(template, input.name.as_deref(), Utc::now());

    tracing::info!(
        workflow_id = %workflow.id,
        template_id = %workflow.template_id,
        steps = workflow.steps.len(),
        "Workflow created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: workflow })))
}
