//! Application state - shared across all handlers.

use std::sync::Arc;

use postboard_core::PostService;
use postboard_core::error::BlobError;
use postboard_core::ports::{BlobStore, PostRepository};
use postboard_infra::{DatabaseConfig, InMemoryPostRepository, LocalBlobStore};

#[cfg(feature = "postgres")]
use postboard_infra::{PostgresPostRepository, connect};

use crate::config::UploadConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: PostService,
    pub blobs: Arc<dyn BlobStore>,
    pub max_upload_bytes: usize,
}

impl AppState {
    /// Assemble state from already-built collaborators.
    pub fn from_parts(
        repo: Arc<dyn PostRepository>,
        blobs: Arc<dyn BlobStore>,
        max_upload_bytes: usize,
    ) -> Self {
        Self {
            posts: PostService::new(repo, blobs.clone()),
            blobs,
            max_upload_bytes,
        }
    }

    /// Build the application state with appropriate implementations.
    pub async fn new(
        db_config: Option<&DatabaseConfig>,
        upload: &UploadConfig,
    ) -> Result<Self, BlobError> {
        let blobs: Arc<dyn BlobStore> = Arc::new(LocalBlobStore::open(&upload.dir).await?);
        let repo = Self::post_repository(db_config).await;

        tracing::info!("Application state initialized");

        Ok(Self::from_parts(repo, blobs, upload.max_bytes))
    }

    #[cfg(feature = "postgres")]
    async fn post_repository(db_config: Option<&DatabaseConfig>) -> Arc<dyn PostRepository> {
        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Arc::new(InMemoryPostRepository::new());
        };

        match connect(config).await {
            Ok(conn) => Arc::new(PostgresPostRepository::new(conn)),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                Arc::new(InMemoryPostRepository::new())
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn post_repository(db_config: Option<&DatabaseConfig>) -> Arc<dyn PostRepository> {
        if db_config.is_some() {
            tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
        }
        tracing::info!("Running without postgres feature - using in-memory repository");
        Arc::new(InMemoryPostRepository::new())
    }
}
