//! Application services - orchestration over the ports.

mod posts;

pub use posts::{CreatePost, PostService, UpdatePost};
