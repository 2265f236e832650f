//! Decoding of base64 media payloads submitted by the browser.
//!
//! Payloads arrive either as bare base64 or as a `data:` URL. Everything is
//! validated here so that a bad payload is rejected before any outbound
//! call is made.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::ImageFormat;

use crate::error::CoreError;

/// Ceiling on the decoded size of any media payload (10 MB).
pub const MAX_PAYLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Strip a `data:<mime>;base64,` prefix if present.
pub fn strip_data_url(payload: &str) -> &str {
    let trimmed = payload.trim();
    if trimmed.starts_with("data:") {
        match trimmed.split_once(',') {
            Some((_, data)) => data,
            None => "",
        }
    } else {
        trimmed
    }
}

/// Decode a base64 (or data URL) payload into bytes.
///
/// `what` names the payload in error messages (e.g. `"image"`).
pub fn decode_base64_payload(payload: &str, what: &str) -> Result<Vec<u8>, CoreError> {
    let data = strip_data_url(payload);
    if data.is_empty() {
        return Err(CoreError::Validation(format!("No {what} data provided")));
    }

    let bytes = STANDARD
        .decode(data)
        .map_err(|e| CoreError::Validation(format!("Invalid {what} encoding: {e}")))?;

    if bytes.is_empty() {
        return Err(CoreError::Validation(format!("No {what} data provided")));
    }
    if bytes.len() > MAX_PAYLOAD_BYTES {
        return Err(CoreError::Validation(format!(
            "{what} exceeds maximum size of {MAX_PAYLOAD_BYTES} bytes (got {})",
            bytes.len()
        )));
    }
    Ok(bytes)
}

/// A validated image payload ready to send to a vision model.
#[derive(Debug, Clone)]
pub struct ImagePayload {
    base64: String,
    format: ImageFormat,
}

impl ImagePayload {
    /// Validate a browser-supplied image.
    ///
    /// The bytes must decode and sniff as a known image format; the format is
    /// taken from the magic bytes, never from the data URL's declared type.
    pub fn parse(payload: &str) -> Result<Self, CoreError> {
        let bytes = decode_base64_payload(payload, "image")?;
        let format = image::guess_format(&bytes).map_err(|_| {
            CoreError::Validation("Payload is not a recognised image format".to_string())
        })?;

        Ok(Self {
            base64: STANDARD.encode(&bytes),
            format,
        })
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.to_mime_type()
    }

    /// Re-encode as a `data:` URL with the sniffed MIME type.
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type(), self.base64)
    }
}
