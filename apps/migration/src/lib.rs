//! Database migrations.
//!
//! Run with `cargo run -p migration -- up` against `DATABASE_URL`.

pub use sea_orm_migration::prelude::*;

mod m20241018_000001_create_posts;

/// Migrator for running database migrations.
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20241018_000001_create_posts::Migration)]
    }
}
