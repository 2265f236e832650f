/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Hosted model configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Bearer token for the API.
    pub api_key: String,
    /// Base URL without a trailing slash.
    pub base_url: String,
    /// Model used for image classification.
    pub vision_model: String,
    /// Model used for template matching.
    pub text_model: String,
    /// Model used for audio transcription.
    pub transcription_model: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl ModelConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                      | Default                     |
    /// |------------------------------|-----------------------------|
    /// | `OPENAI_API_KEY`             | (required)                  |
    /// | `OPENAI_BASE_URL`            | `https://api.openai.com/v1` |
    /// | `OPENAI_VISION_MODEL`        | `gpt-4o`                    |
    /// | `OPENAI_TEXT_MODEL`          | `gpt-4`                     |
    /// | `OPENAI_TRANSCRIPTION_MODEL` | `whisper-1`                 |
    /// | `OPENAI_TIMEOUT_SECS`        | `60`                        |
    pub fn from_env() -> Self {
        let api_key = std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY must be set");

        let base_url = std::env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.into())
            .trim_end_matches('/')
            .to_string();

        let vision_model = std::env::var("OPENAI_VISION_MODEL").unwrap_or_else(|_| "gpt-4o".into());
        let text_model = std::env::var("OPENAI_TEXT_MODEL").unwrap_or_else(|_| "gpt-4".into());
        let transcription_model =
            std::env::var("OPENAI_TRANSCRIPTION_MODEL").unwrap_or_else(|_| "whisper-1".into());

        let timeout_secs: u64 = std::env::var("OPENAI_TIMEOUT_SECS")
            .unwrap_or_else(|_| "60".into())
            .parse()
            .expect("OPENAI_TIMEOUT_SECS must be a valid u64");

        Self {
            api_key,
            base_url,
            vision_model,
            text_model,
            transcription_model,
            timeout_secs,
        }
    }
}
