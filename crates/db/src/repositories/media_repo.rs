//! Repository for the `media` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::media::{CreateMedia, Media, MediaFilter, MediaTotals};
use crate::repositories::contains_pattern;

const COLUMNS: &str =
    "id, name, url, storage_key, kind, mime_type, size, portfolio_id, created_at";

/// Provides CRUD operations for media assets.
pub struct MediaRepo;

impl MediaRepo {
    /// Record an uploaded object, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMedia) -> Result<Media, sqlx::Error> {
        let query = format!(
            "INSERT INTO media (name, url, storage_key, kind, mime_type, size, portfolio_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(&input.name)
            .bind(&input.url)
            .bind(&input.storage_key)
            .bind(&input.kind)
            .bind(&input.mime_type)
            .bind(input.size)
            .bind(input.portfolio_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Media>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM media WHERE id = $1");
        sqlx::query_as::<_, Media>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List media newest first. `search` is a case-insensitive substring of
    /// the original file name.
    pub async fn list(pool: &PgPool, filter: &MediaFilter) -> Result<Vec<Media>, sqlx::Error> {
        let pattern = contains_pattern(filter.search.as_deref());
        let query = format!(
            "SELECT {COLUMNS} FROM media
             WHERE ($1::text IS NULL OR kind = $1)
               AND ($2::text IS NULL OR name ILIKE $2)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(&filter.kind)
            .bind(&pattern)
            .fetch_all(pool)
            .await
    }

    /// Media attached to one portfolio item.
    pub async fn list_by_portfolio(
        pool: &PgPool,
        portfolio_id: DbId,
    ) -> Result<Vec<Media>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM media WHERE portfolio_id = $1 ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Media>(&query)
            .bind(portfolio_id)
            .fetch_all(pool)
            .await
    }

    /// Delete the row. Returns `true` if a row was removed. The stored
    /// object is the caller's responsibility.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM media WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of assets, split by kind, and their combined size.
    pub async fn totals(pool: &PgPool) -> Result<MediaTotals, sqlx::Error> {
        sqlx::query_as::<_, MediaTotals>(
            "SELECT COUNT(*) AS count,
                    COUNT(*) FILTER (WHERE kind = 'image') AS images,
                    COUNT(*) FILTER (WHERE kind = 'video') AS videos,
                    COALESCE(SUM(size), 0)::BIGINT AS total_bytes
             FROM media",
        )
        .fetch_one(pool)
        .await
    }
}
