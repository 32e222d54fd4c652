//! Data Transfer Objects - request/response types for the posts API.

use serde::{Deserialize, Serialize};

/// Query string of `GET /api/posts`.
///
/// Values are kept raw; anything that is not a positive integer disables
/// paging rather than failing the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsQuery {
    pub page_size: Option<String>,
    pub cur_page: Option<String>,
}

/// A post as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image_path: String,
    pub creator: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Response of `GET /api/posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsResponse {
    pub message: String,
    pub posts: Vec<PostResponse>,
    /// Size of the whole collection, independent of the page returned.
    pub max_posts: u64,
}

/// Response of `POST /api/posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostResponse {
    pub message: String,
    pub post: PostResponse,
}
