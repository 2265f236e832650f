use async_trait::async_trait;

use crate::error::ModelError;
use crate::types::ChatRequest;

/// A hosted chat-completion model.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Run one completion and return the text of the first choice.
    async fn complete(&self, request: &ChatRequest) -> Result<String, ModelError>;
}

/// A hosted speech-to-text model.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Transcribe an audio recording. `file_name` carries the extension the
    /// API uses to infer the container format.
    async fn transcribe(&self, audio: Vec<u8>, file_name: &str) -> Result<String, ModelError>;
}
