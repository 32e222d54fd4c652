//! Blob store port - where uploaded images live.

use async_trait::async_trait;

use crate::error::BlobError;

/// A stored binary payload.
#[derive(Debug, Clone)]
pub struct Blob {
    pub media_type: String,
    pub data: Vec<u8>,
}

/// Blob store trait - abstraction over image storage backends (disk, memory).
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `data` under `name`. Returns the name the blob can be fetched by.
    ///
    /// Fails with `BlobError::UnsupportedMediaType` for anything but PNG/JPEG.
    async fn put(&self, name: &str, media_type: &str, data: Vec<u8>) -> Result<String, BlobError>;

    /// Fetch a blob by name.
    async fn get(&self, name: &str) -> Result<Option<Blob>, BlobError>;
}
