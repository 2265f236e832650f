//! S3-compatible [`StorageProvider`].

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::Credentials;
use aws_sdk_s3::config::{Builder as S3ConfigBuilder, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_sdk_s3::Client;

use crate::config::StorageConfig;
use crate::storage::{object_key, StorageError, StorageProvider};

/// Uploads public-read objects to an S3-compatible bucket.
pub struct S3Storage {
    client: Client,
    endpoint: String,
    bucket: String,
}

impl S3Storage {
    pub fn new(config: &StorageConfig) -> Self {
        let credentials = Credentials::new(
            &config.access_key_id,
            &config.secret_access_key,
            None,
            None,
            "grow-static",
        );

        let s3_config = S3ConfigBuilder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .endpoint_url(&config.endpoint)
            .credentials_provider(credentials)
            .build();

        Self {
            client: Client::from_conf(s3_config),
            endpoint: config.endpoint.clone(),
            bucket: config.bucket.clone(),
        }
    }

    /// Public URL for an object key.
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/{}/{}", self.endpoint, self.bucket, key)
    }
}

#[async_trait]
impl StorageProvider for S3Storage {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        content_type: &str,
        folder: &str,
    ) -> Result<String, StorageError> {
        let key = object_key(folder, file_name, chrono::Utc::now())?;
        let size = bytes.len();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(&key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .acl(ObjectCannedAcl::PublicRead)
            .send()
            .await
            .map_err(|e| StorageError::Upload {
                key: key.clone(),
                message: e.to_string(),
            })?;

        tracing::info!(bucket = %self.bucket, key = %key, size, "Object uploaded");
        Ok(self.public_url(&key))
    }
}
