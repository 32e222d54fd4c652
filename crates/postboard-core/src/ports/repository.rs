use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{NewPost, Pagination, Post, PostChanges};
use crate::error::RepoError;

/// Generic repository trait defining standard read operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Count every entity in the collection.
    async fn count(&self) -> Result<u64, RepoError>;
}

/// Post repository.
///
/// Mutations are scoped by both id and creator so that "missing" and
/// "owned by someone else" look the same to the caller.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    /// Insert a post, assigning it a fresh id.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// List posts in insertion order, optionally restricted to one page.
    async fn find_page(&self, pagination: Option<Pagination>) -> Result<Vec<Post>, RepoError>;

    /// Delete the post with `id` if `creator` owns it. Returns rows removed.
    async fn delete_owned(&self, id: Uuid, creator: Uuid) -> Result<u64, RepoError>;

    /// Replace the mutable fields of the post with `id` if `creator` owns it.
    /// Returns rows modified.
    async fn replace_owned(
        &self,
        id: Uuid,
        creator: Uuid,
        changes: PostChanges,
    ) -> Result<u64, RepoError>;
}
