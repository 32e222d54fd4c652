//! Domain entities - the core business objects.

mod pagination;
mod post;
mod upload;

pub use pagination::{Pagination, PostPage};
pub use post::{NewPost, Post, PostChanges, parse_post_id};
pub use upload::{ImageKind, ImageUpload, image_url, stored_file_name};
