/// S3-compatible storage configuration.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Service endpoint, e.g. `https://nyc3.digitaloceanspaces.com`.
    pub endpoint: String,
    pub region: String,
    pub bucket: String,
    pub access_key_id: String,
    pub secret_access_key: String,
}

impl StorageConfig {
    /// Load configuration from environment variables.
    ///
    /// Returns `None` when any of `DO_SPACES_ENDPOINT`,
    /// `DO_SPACES_BUCKET_NAME`, `DO_SPACES_ACCESS_KEY_ID` or
    /// `DO_SPACES_SECRET_ACCESS_KEY` is unset. `DO_SPACES_REGION` defaults to
    /// `us-east-1`.
    pub fn from_env() -> Option<Self> {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());

        Some(Self {
            endpoint: var("DO_SPACES_ENDPOINT")?.trim_end_matches('/').to_string(),
            region: var("DO_SPACES_REGION").unwrap_or_else(|| "us-east-1".into()),
            bucket: var("DO_SPACES_BUCKET_NAME")?,
            access_key_id: var("DO_SPACES_ACCESS_KEY_ID")?,
            secret_access_key: var("DO_SPACES_SECRET_ACCESS_KEY")?,
        })
    }
}
