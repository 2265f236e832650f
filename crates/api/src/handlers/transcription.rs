//! Handler for voice recordings: archive, then transcribe.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use grow_core::payload::decode_base64_payload;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::state::AppState;

/// Storage folder for archived recordings.
pub const RECORDINGS_FOLDER: &str = "recordings";

/// Container the browser recorder produces.
pub const RECORDING_CONTENT_TYPE: &str = "audio/webm";

/// Request body for `POST /transcribe`.
#[derive(Debug, Deserialize)]
pub struct TranscribeRequest {
    /// Base64 audio or a `data:` URL.
    #[serde(default)]
    pub audio: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscribeResponse {
    pub success: bool,
    pub transcript: String,
    /// Public URL of the archived recording, `null` when storage is off.
    pub audio_url: Option<String>,
}

/// POST /api/v1/transcribe
///
/// The recording is uploaded before it is transcribed; an upload failure
/// aborts the request.
pub async fn transcribe(
    State(state): State<AppState>,
    Json(input): Json<TranscribeRequest>,
) -> AppResult<impl IntoResponse> {
    let audio = decode_base64_payload(&input.audio, "audio")?;
    let file_name = format!("recording-{}.webm", Utc::now().timestamp_millis());

    let audio_url = match &state.storage {
        Some(storage) => {
            let url = storage
                .upload(
                    audio.clone(),
                    &file_name,
                    RECORDING_CONTENT_TYPE,
                    RECORDINGS_FOLDER,
                )
                .await?;
            tracing::debug!(url = %url, "Recording archived");
            Some(url)
        }
        None => {
            tracing::warn!("Object storage not configured, recording will not be archived");
            None
        }
    };

    let bytes = audio.len();
    let transcript = state.transcriber.transcribe(audio, &file_name).await?;

    tracing::info!(
        bytes,
        chars = transcript.chars().count(),
        archived = audio_url.is_some(),
        "Recording transcribed"
    );

    Ok(Json(TranscribeResponse {
        success: true,
        transcript,
        audio_url,
    }))
}
