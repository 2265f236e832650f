use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Errors from an object storage backend.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The object could not be written.
    #[error("Upload of '{key}' failed: {message}")]
    Upload { key: String, message: String },

    /// The object name or folder is unusable.
    #[error("Invalid object name: {0}")]
    InvalidName(String),
}

/// Write-only object storage returning public URLs.
#[async_trait]
pub trait StorageProvider: Send + Sync {
    /// Store `bytes` under `folder` and return the object's public URL.
    async fn upload(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        content_type: &str,
        folder: &str,
    ) -> Result<String, StorageError>;
}

/// Build an object key: `{folder}/{millis}-{file_name}`, or
/// `{millis}-{file_name}` when `folder` is empty.
pub fn object_key(folder: &str, file_name: &str, now: DateTime<Utc>) -> Result<String, StorageError> {
    let file_name = file_name.trim();
    if file_name.is_empty() || file_name.contains('/') || file_name.contains("..") {
        return Err(StorageError::InvalidName(file_name.to_string()));
    }

    let folder = folder.trim().trim_matches('/');
    if folder.split('/').any(|segment| segment == "..") {
        return Err(StorageError::InvalidName(folder.to_string()));
    }

    let stamped = format!("{}-{file_name}", now.timestamp_millis());
    Ok(if folder.is_empty() {
        stamped
    } else {
        format!("{folder}/{stamped}")
    })
}
