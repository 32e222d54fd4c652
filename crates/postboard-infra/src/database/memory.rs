//! In-memory post repository - used when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use postboard_core::domain::{NewPost, Pagination, Post, PostChanges};
use postboard_core::error::RepoError;
use postboard_core::ports::{BaseRepository, PostRepository};

/// In-memory post repository backed by a `Vec` in insertion order.
///
/// Note: Data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|p| p.id == id).cloned())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.posts.read().await.len() as u64)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, new: NewPost) -> Result<Post, RepoError> {
        let post = Post::from_new(Uuid::new_v4(), new);
        self.posts.write().await.push(post.clone());
        Ok(post)
    }

    async fn find_page(&self, pagination: Option<Pagination>) -> Result<Vec<Post>, RepoError> {
        let posts = self.posts.read().await;

        let page = match pagination {
            Some(p) => {
                let skip = usize::try_from(p.offset()).unwrap_or(usize::MAX);
                let take = usize::try_from(p.limit()).unwrap_or(usize::MAX);
                posts.iter().skip(skip).take(take).cloned().collect()
            }
            None => posts.clone(),
        };

        Ok(page)
    }

    async fn delete_owned(&self, id: Uuid, creator: Uuid) -> Result<u64, RepoError> {
        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|p| !(p.id == id && p.is_owned_by(creator)));
        Ok((before - posts.len()) as u64)
    }

    async fn replace_owned(
        &self,
        id: Uuid,
        creator: Uuid,
        changes: PostChanges,
    ) -> Result<u64, RepoError> {
        let mut posts = self.posts.write().await;

        match posts
            .iter_mut()
            .find(|p| p.id == id && p.is_owned_by(creator))
        {
            Some(post) => {
                post.apply(changes);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}
