use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use grow_cloud::StorageError;
use grow_core::error::CoreError;
use grow_openai::ModelError;
use grow_pipeline::PipelineError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps the error enums of every lower crate and adds HTTP-specific
/// variants. Implements [`IntoResponse`] to produce consistent JSON error
/// responses of the form `{ "success": false, "error": ..., "code": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `grow_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A failure in the classify/match pipeline.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// A direct hosted-model call (transcription) failed.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The recording could not be archived.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => classify_core_error(core),

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Pipeline errors ---
            AppError::Pipeline(err) => match err {
                PipelineError::InvalidInput(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                PipelineError::CatalogUnavailable(source) => {
                    tracing::error!(error = %source, "Template catalog unavailable");
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "CATALOG_UNAVAILABLE",
                        "Workflow templates are temporarily unavailable".to_string(),
                    )
                }
                PipelineError::Upstream(model) => upstream_model_error(model),
                PipelineError::Parse(parse) => {
                    tracing::error!(error = %parse, "Unparseable model response");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "PARSE_ERROR",
                        "Failed to parse AI response".to_string(),
                    )
                }
            },

            // --- External services ---
            AppError::Model(model) => upstream_model_error(model),
            AppError::Storage(err) => {
                tracing::error!(error = %err, "Storage upload failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "STORAGE_ERROR",
                    "Failed to store recording".to_string(),
                )
            }

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "success": false,
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn classify_core_error(err: &CoreError) -> (StatusCode, &'static str, String) {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Internal core error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// Hosted-model failures surface as 502. The provider's message is logged
/// but never echoed, since it can quote request content.
fn upstream_model_error(err: &ModelError) -> (StatusCode, &'static str, String) {
    tracing::error!(error = %err, "Hosted model call failed");
    (
        StatusCode::BAD_GATEWAY,
        "UPSTREAM_ERROR",
        "The AI service request failed".to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505
            if db_err.code().as_deref() == Some("23505") {
                let constraint = db_err.constraint().unwrap_or("unknown");
                if constraint.starts_with("uq_") {
                    return (
                        StatusCode::CONFLICT,
                        "CONFLICT",
                        format!("Duplicate value violates unique constraint: {constraint}"),
                    );
                }
            }
            tracing::error!(error = %db_err, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}
