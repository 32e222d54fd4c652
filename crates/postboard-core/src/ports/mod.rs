//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod blob;
mod repository;

pub use auth::{AuthError, TokenClaims, TokenService};
pub use blob::{Blob, BlobStore};
pub use repository::{BaseRepository, PostRepository};
