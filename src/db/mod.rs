//! Database module
//!
//! This module handles database connections, migrations, seeding and
//! repositories.

pub mod connection;
pub mod repositories;
pub mod seed;

use sqlx::PgPool;

pub use connection::*;
pub use seed::{SeedOutcome, seed_root};

/// Run database migrations
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
