//! Postgres access for the Folio CMS: pool setup, migrations, models, and
//! repositories for the `portfolio`, `media`, and `page_content` tables.

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Tables the API cannot run without.
pub const REQUIRED_TABLES: &[&str] = &["portfolio", "media", "page_content"];

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|_| ())
}

/// Apply embedded migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Names from [`REQUIRED_TABLES`] that do not exist in the `public` schema.
pub async fn missing_tables(pool: &DbPool) -> Result<Vec<String>, sqlx::Error> {
    let required: Vec<String> = REQUIRED_TABLES.iter().map(|t| t.to_string()).collect();
    sqlx::query_scalar::<_, String>(
        "SELECT t.name FROM UNNEST($1::text[]) AS t(name)
         WHERE NOT EXISTS (
             SELECT 1 FROM information_schema.tables
             WHERE table_schema = 'public' AND table_name = t.name
         )
         ORDER BY t.name",
    )
    .bind(&required)
    .fetch_all(pool)
    .await
}
