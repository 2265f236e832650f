/// Errors from the hosted model API layer.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Model API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message extracted from the body, or the raw body.
        message: String,
    },

    /// The API answered but the completion carried no content.
    #[error("Model returned an empty response")]
    EmptyResponse,

    /// The client could not be constructed from its configuration.
    #[error("Invalid model configuration: {0}")]
    Config(String),
}
