use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;
use std::env;

/// Initialize the document-store pool and run migrations
///
/// Environment variables:
/// - DATABASE_URL: PostgreSQL connection string (required)
///
/// # Errors
/// Returns error if DATABASE_URL is not set, the connection fails, or
/// migrations cannot be applied
pub async fn init_database() -> anyhow::Result<PgPool> {
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = create_postgres_pool(&DatabaseConfig::new(db_url)).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}
