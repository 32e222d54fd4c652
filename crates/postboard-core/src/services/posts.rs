//! Post service - the request-handling contract for posts.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{
    ImageKind, ImageUpload, NewPost, Pagination, Post, PostChanges, PostPage, image_url,
    stored_file_name,
};
use crate::error::DomainError;
use crate::ports::{BlobStore, PostRepository};

/// Input for creating a post.
#[derive(Debug, Clone)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
    pub image: ImageUpload,
}

/// Input for replacing a post.
///
/// When `image` is `None` the caller must supply the current `image_path`;
/// it is carried forward as-is.
#[derive(Debug, Clone)]
pub struct UpdatePost {
    pub title: String,
    pub content: String,
    pub image_path: Option<String>,
    pub image: Option<ImageUpload>,
}

/// Orchestrates post operations over a repository and a blob store.
///
/// `caller` is the identity resolved for the request; `origin` is the
/// `scheme://host` the request came in through and prefixes image URLs.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    blobs: Arc<dyn BlobStore>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, blobs: Arc<dyn BlobStore>) -> Self {
        Self { posts, blobs }
    }

    /// Create a post owned by `caller`.
    ///
    /// The image is written before the record. A failed insert leaves the
    /// blob behind unreferenced.
    pub async fn create(
        &self,
        caller: Uuid,
        origin: &str,
        input: CreatePost,
    ) -> Result<Post, DomainError> {
        let image_path = self.store_image(origin, input.image).await?;

        let post = self
            .posts
            .insert(NewPost {
                title: input.title,
                content: input.content,
                image_path,
                creator: caller,
            })
            .await?;

        Ok(post)
    }

    /// Replace the post `id` if `caller` created it.
    pub async fn update(
        &self,
        caller: Uuid,
        origin: &str,
        id: Uuid,
        input: UpdatePost,
    ) -> Result<(), DomainError> {
        let image_path = match input.image {
            Some(upload) => self.store_image(origin, upload).await?,
            None => input.image_path.ok_or_else(|| {
                DomainError::Validation(
                    "imagePath is required when no image is uploaded".to_string(),
                )
            })?,
        };

        let changes = PostChanges {
            title: input.title,
            content: input.content,
            image_path,
        };

        match self.posts.replace_owned(id, caller, changes).await? {
            0 => Err(DomainError::Unauthorized),
            _ => Ok(()),
        }
    }

    /// Delete the post `id` if `caller` created it. The image is left in place.
    pub async fn delete(&self, caller: Uuid, id: Uuid) -> Result<(), DomainError> {
        match self.posts.delete_owned(id, caller).await? {
            0 => Err(DomainError::Unauthorized),
            _ => Ok(()),
        }
    }

    /// List posts. `total` always counts the whole collection.
    pub async fn list(&self, pagination: Option<Pagination>) -> Result<PostPage, DomainError> {
        let posts = self.posts.find_page(pagination).await?;
        let total = self.posts.count().await?;

        Ok(PostPage { posts, total })
    }

    /// Fetch a single post. No ownership check.
    pub async fn get(&self, id: Uuid) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: "post",
                id,
            })
    }

    async fn store_image(&self, origin: &str, upload: ImageUpload) -> Result<String, DomainError> {
        let kind = ImageKind::from_media_type(&upload.media_type)
            .ok_or_else(|| DomainError::InvalidMediaType(upload.media_type.clone()))?;

        let file_name =
            stored_file_name(&upload.original_name, kind, Utc::now().timestamp_millis());
        let stored = self
            .blobs
            .put(&file_name, kind.media_type(), upload.data)
            .await?;

        Ok(image_url(origin, &stored))
    }
}
