//! Object storage for user recordings.
//!
//! [`StorageProvider`] is the seam the API depends on; [`S3Storage`] talks
//! to any S3-compatible service (DigitalOcean Spaces in production).

pub mod config;
pub mod s3;
pub mod storage;

pub use config::StorageConfig;
pub use s3::S3Storage;
pub use storage::{object_key, StorageError, StorageProvider};
