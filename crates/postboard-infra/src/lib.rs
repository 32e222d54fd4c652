//! # Postboard Infrastructure
//!
//! Concrete implementations of the ports defined in `postboard-core`.
//! This crate contains the database, blob storage and token integrations.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external services, in-memory only
//! - `postgres` - PostgreSQL post repository via SeaORM
//! - `auth` - JWT bearer tokens

pub mod database;
pub mod storage;

#[cfg(feature = "auth")]
pub mod auth;

// Re-exports - In-Memory
pub use database::{DatabaseConfig, InMemoryPostRepository};
pub use storage::{InMemoryBlobStore, LocalBlobStore};

#[cfg(feature = "postgres")]
pub use database::{PostgresPostRepository, connect};

#[cfg(feature = "auth")]
pub use auth::{JwtConfig, JwtTokenService};
