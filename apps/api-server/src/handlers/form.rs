//! Multipart form reading for post create/update.

use std::collections::HashMap;

use actix_multipart::{Multipart, MultipartError};
use futures::TryStreamExt;

use postboard_core::domain::ImageUpload;

use crate::middleware::error::{AppError, AppResult};

/// Name of the file part carrying the post image.
pub const IMAGE_FIELD: &str = "image";

/// Cap for a single text part.
const MAX_TEXT_BYTES: usize = 1024 * 1024;

fn malformed(err: MultipartError) -> AppError {
    AppError::BadRequest(format!("malformed multipart body: {}", err))
}

/// Text parts and the optional image of a post form.
#[derive(Debug, Default)]
pub struct PostForm {
    fields: HashMap<String, String>,
    pub image: Option<ImageUpload>,
}

impl PostForm {
    /// Drain the multipart stream.
    ///
    /// A file part with an empty filename and no data (an untouched file
    /// input) counts as no upload. Any file part other than `image` is
    /// rejected, as is a second `image`.
    pub async fn read(mut payload: Multipart, max_image_bytes: usize) -> AppResult<Self> {
        let mut form = Self::default();

        while let Some(mut field) = payload.try_next().await.map_err(malformed)? {
            let name = field.name().unwrap_or_default().to_string();
            let file_name = field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .map(str::to_string);
            let media_type = field
                .content_type()
                .map(|mime| mime.essence_str().to_string())
                .unwrap_or_default();

            let limit = if file_name.is_some() {
                max_image_bytes
            } else {
                MAX_TEXT_BYTES
            };

            let mut data = Vec::new();
            while let Some(chunk) = field.try_next().await.map_err(malformed)? {
                if data.len() + chunk.len() > limit {
                    return Err(AppError::PayloadTooLarge(format!(
                        "field '{}' exceeds {} bytes",
                        name, limit
                    )));
                }
                data.extend_from_slice(&chunk);
            }

            match file_name {
                Some(original) if original.is_empty() && data.is_empty() => {}
                Some(original) if name == IMAGE_FIELD => {
                    if form.image.is_some() {
                        return Err(AppError::BadRequest(
                            "only one image may be uploaded".to_string(),
                        ));
                    }
                    form.image = Some(ImageUpload::new(original, media_type, data));
                }
                Some(_) => {
                    return Err(AppError::BadRequest(format!(
                        "unexpected file field '{}'",
                        name
                    )));
                }
                None => {
                    let value = String::from_utf8(data).map_err(|_| {
                        AppError::BadRequest(format!("field '{}' is not valid UTF-8", name))
                    })?;
                    form.fields.insert(name, value);
                }
            }
        }

        Ok(form)
    }

    /// Take a text field, treating an empty value as absent.
    pub fn take(&mut self, name: &str) -> Option<String> {
        self.fields.remove(name).filter(|value| !value.is_empty())
    }

    /// Take a text field that must be present. Empty text is allowed.
    pub fn require(&mut self, name: &str) -> AppResult<String> {
        self.fields
            .remove(name)
            .ok_or_else(|| AppError::BadRequest(format!("missing field '{}'", name)))
    }
}
