//! Local filesystem blob store.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;

use postboard_core::domain::ImageKind;
use postboard_core::error::BlobError;
use postboard_core::ports::{Blob, BlobStore};

use super::is_valid_name;

/// Stores each blob as a file directly under `root`.
///
/// The media type is not persisted separately; it is recovered from the
/// file extension when the blob is read back.
pub struct LocalBlobStore {
    root: PathBuf,
}

impl LocalBlobStore {
    /// Open (creating if needed) the upload directory.
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, BlobError> {
        let root = root.into();
        tokio::fs::create_dir_all(&root)
            .await
            .map_err(|e| BlobError::Io(format!("{}: {}", root.display(), e)))?;

        tracing::info!(dir = %root.display(), "Blob store ready");
        Ok(Self { root })
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn put(&self, name: &str, media_type: &str, data: Vec<u8>) -> Result<String, BlobError> {
        if ImageKind::from_media_type(media_type).is_none() {
            return Err(BlobError::UnsupportedMediaType(media_type.to_string()));
        }
        if !is_valid_name(name) {
            return Err(BlobError::InvalidName(name.to_string()));
        }

        let path = self.root.join(name);
        tokio::fs::write(&path, &data)
            .await
            .map_err(|e| BlobError::Io(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(blob = %name, bytes = data.len(), "Blob written");
        Ok(name.to_string())
    }

    async fn get(&self, name: &str) -> Result<Option<Blob>, BlobError> {
        if !is_valid_name(name) {
            return Ok(None);
        }

        let path = self.root.join(name);
        let data = match tokio::fs::read(&path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(BlobError::Io(format!("{}: {}", path.display(), e))),
        };

        let media_type = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(ImageKind::from_extension)
            .map(ImageKind::media_type)
            .unwrap_or("application/octet-stream");

        Ok(Some(Blob {
            media_type: media_type.to_string(),
            data,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_put_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("images");
        let store = LocalBlobStore::open(&root).await.unwrap();

        let name = store
            .put("cover.png-1.png", "image/png", vec![1, 2, 3])
            .await
            .unwrap();
        assert_eq!(name, "cover.png-1.png");
        assert!(root.join("cover.png-1.png").exists());

        let blob = store.get(&name).await.unwrap().expect("blob exists");
        assert_eq!(blob.data, vec![1, 2, 3]);
        assert_eq!(blob.media_type, "image/png");

        let jpeg = store
            .put("shot.jpg-2.jpg", "image/jpeg", vec![0xFF])
            .await
            .unwrap();
        assert_eq!(store.get(&jpeg).await.unwrap().unwrap().media_type, "image/jpeg");
    }

    #[tokio::test]
    async fn test_rejects_unsupported_media_type() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("images");
        let store = LocalBlobStore::open(&root).await.unwrap();

        let err = store
            .put("anim.gif-1.gif", "image/gif", vec![1])
            .await
            .unwrap_err();
        assert!(matches!(err, BlobError::UnsupportedMediaType(_)));
        assert!(!root.join("anim.gif-1.gif").exists());
    }

    #[tokio::test]
    async fn test_missing_and_traversal_names() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("images");
        let store = LocalBlobStore::open(&root).await.unwrap();

        assert!(store.get("nope.png").await.unwrap().is_none());
        assert!(store.get("../Cargo.toml").await.unwrap().is_none());
        assert!(matches!(
            store.put("../escape.png", "image/png", vec![1]).await,
            Err(BlobError::InvalidName(_))
        ));
    }
}
