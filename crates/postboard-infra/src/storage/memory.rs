//! In-memory blob store - for tests and disk-less runs.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use postboard_core::domain::ImageKind;
use postboard_core::error::BlobError;
use postboard_core::ports::{Blob, BlobStore};

use super::is_valid_name;

/// In-memory blob store using a HashMap with async RwLock.
#[derive(Default)]
pub struct InMemoryBlobStore {
    blobs: RwLock<HashMap<String, Blob>>,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored blobs.
    pub async fn len(&self) -> usize {
        self.blobs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn put(&self, name: &str, media_type: &str, data: Vec<u8>) -> Result<String, BlobError> {
        let kind = ImageKind::from_media_type(media_type)
            .ok_or_else(|| BlobError::UnsupportedMediaType(media_type.to_string()))?;
        if !is_valid_name(name) {
            return Err(BlobError::InvalidName(name.to_string()));
        }

        self.blobs.write().await.insert(
            name.to_string(),
            Blob {
                media_type: kind.media_type().to_string(),
                data,
            },
        );
        Ok(name.to_string())
    }

    async fn get(&self, name: &str) -> Result<Option<Blob>, BlobError> {
        Ok(self.blobs.read().await.get(name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_get() {
        let store = InMemoryBlobStore::new();
        store.put("a.png-1.png", "image/png", vec![7]).await.unwrap();

        let blob = store.get("a.png-1.png").await.unwrap().unwrap();
        assert_eq!(blob.data, vec![7]);
        assert_eq!(store.len().await, 1);
        assert!(store.get("b.png").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_normalizes_jpg_media_type() {
        let store = InMemoryBlobStore::new();
        store.put("a.jpg-1.jpg", "image/jpg", vec![7]).await.unwrap();

        let blob = store.get("a.jpg-1.jpg").await.unwrap().unwrap();
        assert_eq!(blob.media_type, "image/jpeg");
    }

    #[tokio::test]
    async fn test_rejects_unsupported_media_type() {
        let store = InMemoryBlobStore::new();
        let err = store.put("a.bmp", "image/bmp", vec![7]).await.unwrap_err();

        assert!(matches!(err, BlobError::UnsupportedMediaType(_)));
        assert!(store.is_empty().await);
    }
}
