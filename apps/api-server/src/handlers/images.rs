//! Serves uploaded images back from the blob store.

use actix_web::{HttpResponse, http::header, web};
use postboard_shared::ErrorResponse;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /images/{name}
pub async fn serve_image(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let name = path.into_inner();

    let blob = state
        .blobs
        .get(&name)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(match blob {
        // Stored names embed the upload time, so content never changes
        Some(blob) => HttpResponse::Ok()
            .content_type(blob.media_type)
            .insert_header((header::CACHE_CONTROL, "public, max-age=31536000, immutable"))
            .body(blob.data),
        None => HttpResponse::NotFound().json(
            ErrorResponse::not_found("image not found").with_instance(format!("/images/{}", name)),
        ),
    })
}
