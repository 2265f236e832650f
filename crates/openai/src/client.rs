//! REST client for the hosted model endpoints.
//!
//! Wraps `POST /chat/completions` and `POST /audio/transcriptions` using
//! [`reqwest`]. Calls are never retried; a failed call surfaces as a
//! [`ModelError`] for the caller to report.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::multipart::{Form, Part};

use crate::config::ModelConfig;
use crate::error::ModelError;
use crate::model::{ChatModel, Transcriber};
use crate::types::{ChatCompletionResponse, ChatRequest, TranscriptionResponse};

/// HTTP client for an OpenAI-compatible API.
pub struct OpenAIClient {
    client: reqwest::Client,
    base_url: String,
    transcription_model: String,
}

impl OpenAIClient {
    /// Build a client with the bearer token installed as a default header.
    pub fn new(config: &ModelConfig) -> Result<Self, ModelError> {
        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_key))
            .map_err(|e| ModelError::Config(e.to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            transcription_model: config.transcription_model.clone(),
        })
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. On failure, extract
    /// `error.message` from a JSON body when present, else keep the raw body.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ModelError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v["error"]["message"].as_str().map(String::from))
            .unwrap_or(body);

        Err(ModelError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// MIME type for an audio file name, keyed on its extension.
pub fn audio_mime_type(file_name: &str) -> &'static str {
    let ext = file_name.rsplit('.').next().unwrap_or("").to_lowercase();
    match ext.as_str() {
        "mp3" | "mpga" | "mpeg" => "audio/mpeg",
        "wav" => "audio/wav",
        "flac" => "audio/flac",
        "m4a" | "mp4" => "audio/mp4",
        "ogg" | "oga" => "audio/ogg",
        _ => "audio/webm",
    }
}

#[async_trait]
impl ChatModel for OpenAIClient {
    async fn complete(&self, request: &ChatRequest) -> Result<String, ModelError> {
        tracing::debug!(
            model = %request.model,
            messages = request.messages.len(),
            vision = request.has_image(),
            "Sending chat completion"
        );

        let response = self
            .client
            .post(self.url("/chat/completions"))
            .json(request)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;

        let completion: ChatCompletionResponse = response.json().await?;
        completion.first_content().ok_or(ModelError::EmptyResponse)
    }
}

#[async_trait]
impl Transcriber for OpenAIClient {
    async fn transcribe(&self, audio: Vec<u8>, file_name: &str) -> Result<String, ModelError> {
        let mime_type = audio_mime_type(file_name);
        tracing::debug!(
            model = %self.transcription_model,
            bytes = audio.len(),
            mime_type,
            "Sending transcription"
        );

        let part = Part::bytes(audio)
            .file_name(file_name.to_string())
            .mime_str(mime_type)
            .map_err(|e| ModelError::Config(e.to_string()))?;
        let form = Form::new()
            .text("model", self.transcription_model.clone())
            .part("file", part);

        let response = self
            .client
            .post(self.url("/audio/transcriptions"))
            .multipart(form)
            .send()
            .await?;
        let response = Self::ensure_success(response).await?;

        let transcription: TranscriptionResponse = response.json().await?;
        Ok(transcription.text)
    }
}
