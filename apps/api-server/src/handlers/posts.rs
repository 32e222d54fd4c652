//! Post handlers.

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, web};

use postboard_core::DomainError;
use postboard_core::domain::{Pagination, Post, parse_post_id};
use postboard_core::services::{CreatePost, UpdatePost};
use postboard_shared::MessageResponse;
use postboard_shared::dto::{CreatePostResponse, ListPostsQuery, ListPostsResponse, PostResponse};

use super::form::PostForm;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// `scheme://host` as seen on the inbound request.
fn request_origin(req: &HttpRequest) -> String {
    let info = req.connection_info();
    format!("{}://{}", info.scheme(), info.host())
}

fn post_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        title: post.title,
        content: post.content,
        image_path: post.image_path,
        creator: post.creator.to_string(),
        created_at: post.created_at.to_rfc3339(),
        updated_at: post.updated_at.to_rfc3339(),
    }
}

/// GET /api/posts?pageSize=&curPage=
///
/// A query string that does not deserialize (e.g. a repeated key) lists
/// everything, like any other unusable paging input.
pub async fn list_posts(req: HttpRequest, state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let query = web::Query::<ListPostsQuery>::from_query(req.query_string())
        .map(web::Query::into_inner)
        .unwrap_or_else(|e| {
            tracing::debug!(error = %e, "Ignoring unusable list query");
            ListPostsQuery::default()
        });

    let pagination =
        Pagination::from_query(query.page_size.as_deref(), query.cur_page.as_deref());

    let page = state.posts.list(pagination).await?;

    Ok(HttpResponse::Ok().json(ListPostsResponse {
        message: "Posts fetched successfully".to_string(),
        posts: page.posts.into_iter().map(post_response).collect(),
        max_posts: page.total,
    }))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    let post = state.posts.get(id).await?;

    Ok(HttpResponse::Ok().json(post_response(post)))
}

/// POST /api/posts - multipart `title`, `content`, `image`
pub async fn create_post(
    req: HttpRequest,
    state: web::Data<AppState>,
    identity: Identity,
    payload: Multipart,
) -> AppResult<HttpResponse> {
    let mut form = PostForm::read(payload, state.max_upload_bytes).await?;

    let input = CreatePost {
        title: form.require("title")?,
        content: form.require("content")?,
        image: form
            .image
            .take()
            .ok_or_else(|| AppError::BadRequest("an image file is required".to_string()))?,
    };

    let post = state
        .posts
        .create(identity.user_id, &request_origin(&req), input)
        .await?;

    tracing::info!(
        post_id = %post.id,
        creator = %identity.user_id,
        email = %identity.email,
        "Post created"
    );

    Ok(HttpResponse::Created().json(CreatePostResponse {
        message: "Post added successfully".to_string(),
        post: post_response(post),
    }))
}

/// PUT /api/posts/{id} - multipart `title`, `content`, and either
/// `imagePath` or a new `image`
pub async fn update_post(
    req: HttpRequest,
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    payload: Multipart,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    let mut form = PostForm::read(payload, state.max_upload_bytes).await?;

    // The body may repeat the id; it has to agree with the path.
    if let Some(body_id) = form.take("id") {
        if parse_post_id(&body_id)? != id {
            return Err(DomainError::InvalidIdentifier(body_id).into());
        }
    }

    let input = UpdatePost {
        title: form.require("title")?,
        content: form.require("content")?,
        image_path: form.take("imagePath"),
        image: form.image.take(),
    };

    state
        .posts
        .update(identity.user_id, &request_origin(&req), id, input)
        .await
        .inspect_err(|e| {
            if matches!(e, DomainError::Unauthorized) {
                tracing::warn!(post_id = %id, caller = %identity.user_id, "Update refused");
            }
        })?;

    tracing::info!(post_id = %id, "Post updated");
    Ok(HttpResponse::Ok().json(MessageResponse::new("Update successful")))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;

    state
        .posts
        .delete(identity.user_id, id)
        .await
        .inspect_err(|e| {
            if matches!(e, DomainError::Unauthorized) {
                tracing::warn!(post_id = %id, caller = %identity.user_id, "Delete refused");
            }
        })?;

    tracing::info!(post_id = %id, "Post deleted");
    Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted")))
}
