//! Repository for the `portfolio` table.

use folio_core::types::DbId;
use sqlx::PgPool;

use crate::models::portfolio::{
    CreatePortfolioItem, PortfolioFilter, PortfolioItem, RecentPortfolioItem, UpdatePortfolioItem,
};
use crate::repositories::contains_pattern;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, category, image_url, video_url, tags, date, \
     featured, status, created_at, updated_at";

/// Provides CRUD operations for portfolio items.
pub struct PortfolioRepo;

impl PortfolioRepo {
    /// Insert a new item, returning the created row.
    ///
    /// Missing `date`, `featured` and `status` fall back to today, `false`
    /// and `draft`. Callers normalise blank optional strings beforehand.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePortfolioItem,
    ) -> Result<PortfolioItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO portfolio
                (title, description, category, image_url, video_url, tags, date, featured, status)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, CURRENT_DATE),
                     COALESCE($8, FALSE), COALESCE($9, 'draft'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.image_url)
            .bind(&input.video_url)
            .bind(&input.tags)
            .bind(input.date)
            .bind(input.featured)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find an item by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PortfolioItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM portfolio WHERE id = $1");
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List items newest first, narrowed by any filters that are set.
    ///
    /// `search` matches title or description case-insensitively, or a tag
    /// exactly.
    pub async fn list(
        pool: &PgPool,
        filter: &PortfolioFilter,
    ) -> Result<Vec<PortfolioItem>, sqlx::Error> {
        let pattern = contains_pattern(filter.search.as_deref());
        let tag = filter.search.as_deref().map(str::trim);
        let query = format!(
            "SELECT {COLUMNS} FROM portfolio
             WHERE ($1::text IS NULL OR category = $1)
               AND ($2::text IS NULL OR status = $2)
               AND ($3::text IS NULL
                    OR title ILIKE $3
                    OR description ILIKE $3
                    OR $4 = ANY(tags))
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(&filter.category)
            .bind(&filter.status)
            .bind(&pattern)
            .bind(tag)
            .fetch_all(pool)
            .await
    }

    /// Update an item. Only non-`None` fields in `input` are applied and
    /// `updated_at` is always bumped.
    ///
    /// A blank `description` or `video_url` clears the column. Returns
    /// `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePortfolioItem,
    ) -> Result<Option<PortfolioItem>, sqlx::Error> {
        let query = format!(
            "UPDATE portfolio SET
                title = COALESCE($2, title),
                description = CASE WHEN $3::text IS NULL THEN description
                                   ELSE NULLIF(BTRIM($3), '') END,
                category = COALESCE($4, category),
                image_url = COALESCE($5, image_url),
                video_url = CASE WHEN $6::text IS NULL THEN video_url
                                 ELSE NULLIF(BTRIM($6), '') END,
                tags = COALESCE($7, tags),
                date = COALESCE($8, date),
                featured = COALESCE($9, featured),
                status = COALESCE($10, status),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.category)
            .bind(&input.image_url)
            .bind(&input.video_url)
            .bind(&input.tags)
            .bind(input.date)
            .bind(input.featured)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an item. Returns `true` if a row was removed.
    ///
    /// Media rows that pointed at it keep existing with `portfolio_id` NULL.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM portfolio WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Published, featured items for the homepage, newest first.
    pub async fn list_featured(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<PortfolioItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM portfolio
             WHERE featured AND status = 'published'
             ORDER BY created_at DESC, id DESC
             LIMIT $1"
        );
        sqlx::query_as::<_, PortfolioItem>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Most recently created items, for the dashboard activity list.
    pub async fn list_recent(
        pool: &PgPool,
        limit: i64,
    ) -> Result<Vec<RecentPortfolioItem>, sqlx::Error> {
        sqlx::query_as::<_, RecentPortfolioItem>(
            "SELECT id, title, category, status, created_at FROM portfolio
             ORDER BY created_at DESC, id DESC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// `(category, status)` of every item, for stats aggregation.
    pub async fn category_status_pairs(
        pool: &PgPool,
    ) -> Result<Vec<(String, String)>, sqlx::Error> {
        sqlx::query_as::<_, (String, String)>("SELECT category, status FROM portfolio")
            .fetch_all(pool)
            .await
    }
}
