use persistence::db::{DatabaseConfig, create_sqlite_pool, run_migrations};
use sqlx::SqlitePool;
use std::env;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://food_inventory.db";

/// Initialize database connection pool from environment variables
///
/// Environment variables:
/// - DATABASE_URL: SQLite connection string (default: "sqlite://food_inventory.db")
///
/// The database file and the `food_items` table are created when missing.
pub async fn init_database() -> anyhow::Result<SqlitePool> {
    let db_url = env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
    let pool = create_sqlite_pool(&DatabaseConfig::new(db_url)).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}
