use grow_core::analysis::ParseError;
use grow_core::catalog::SourceError;
use grow_core::error::CoreError;
use grow_openai::ModelError;

/// Errors produced by pipeline stages.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Missing or invalid caller input. Raised before any network call.
    #[error("{0}")]
    InvalidInput(String),

    /// No template catalog could be loaded.
    #[error("Template catalog unavailable: {0}")]
    CatalogUnavailable(#[from] SourceError),

    /// The hosted model call failed.
    #[error("Hosted model call failed: {0}")]
    Upstream(#[from] ModelError),

    /// The hosted model answered with something that is not the expected JSON.
    #[error("Failed to parse model response: {0}")]
    Parse(#[from] ParseError),
}

impl From<CoreError> for PipelineError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(msg) => PipelineError::InvalidInput(msg),
            other => PipelineError::InvalidInput(other.to_string()),
        }
    }
}
