//! Repository for the `page_content` table.
//!
//! Sections are addressed by `(page_name, section)` rather than by id.

use sqlx::PgPool;

use crate::models::page_content::{
    CreatePageContent, PageContent, PageSummary, UpdatePageContent, UpsertPageContent,
};

const COLUMNS: &str = "id, page_name, section, title, content, content_type, updated_at";

/// Provides keyed CRUD operations for page content sections.
pub struct PageContentRepo;

impl PageContentRepo {
    /// All sections of a page ordered by section key.
    pub async fn list_by_page(
        pool: &PgPool,
        page_name: &str,
    ) -> Result<Vec<PageContent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM page_content WHERE page_name = $1 ORDER BY section"
        );
        sqlx::query_as::<_, PageContent>(&query)
            .bind(page_name)
            .fetch_all(pool)
            .await
    }

    pub async fn find(
        pool: &PgPool,
        page_name: &str,
        section: &str,
    ) -> Result<Option<PageContent>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM page_content WHERE page_name = $1 AND section = $2"
        );
        sqlx::query_as::<_, PageContent>(&query)
            .bind(page_name)
            .bind(section)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new section. A duplicate key violates
    /// `uq_page_content_page_section`.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePageContent,
    ) -> Result<PageContent, sqlx::Error> {
        let query = format!(
            "INSERT INTO page_content (page_name, section, title, content, content_type)
             VALUES ($1, $2, NULLIF(BTRIM($3), ''), $4, COALESCE($5, 'text'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PageContent>(&query)
            .bind(&input.page_name)
            .bind(&input.section)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.content_type)
            .fetch_one(pool)
            .await
    }

    /// Apply the provided fields to an existing section. A blank `title`
    /// clears it. Returns `None` if the section does not exist.
    pub async fn update(
        pool: &PgPool,
        page_name: &str,
        section: &str,
        input: &UpdatePageContent,
    ) -> Result<Option<PageContent>, sqlx::Error> {
        let query = format!(
            "UPDATE page_content SET
                title = CASE WHEN $3::text IS NULL THEN title ELSE NULLIF(BTRIM($3), '') END,
                content = COALESCE($4, content),
                content_type = COALESCE($5, content_type),
                updated_at = NOW()
             WHERE page_name = $1 AND section = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PageContent>(&query)
            .bind(page_name)
            .bind(section)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.content_type)
            .fetch_optional(pool)
            .await
    }

    /// Insert the section, or overwrite every field of the existing one.
    pub async fn upsert(
        pool: &PgPool,
        page_name: &str,
        section: &str,
        input: &UpsertPageContent,
    ) -> Result<PageContent, sqlx::Error> {
        let query = format!(
            "INSERT INTO page_content (page_name, section, title, content, content_type)
             VALUES ($1, $2, NULLIF(BTRIM($3), ''), $4, COALESCE($5, 'text'))
             ON CONFLICT ON CONSTRAINT uq_page_content_page_section DO UPDATE SET
                title = EXCLUDED.title,
                content = EXCLUDED.content,
                content_type = EXCLUDED.content_type,
                updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PageContent>(&query)
            .bind(page_name)
            .bind(section)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.content_type)
            .fetch_one(pool)
            .await
    }

    /// Delete a section. Returns `true` if a row was removed.
    pub async fn delete(
        pool: &PgPool,
        page_name: &str,
        section: &str,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM page_content WHERE page_name = $1 AND section = $2")
            .bind(page_name)
            .bind(section)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Every page that has at least one section.
    pub async fn list_pages(pool: &PgPool) -> Result<Vec<PageSummary>, sqlx::Error> {
        sqlx::query_as::<_, PageSummary>(
            "SELECT page_name, COUNT(*) AS section_count, MAX(updated_at) AS last_updated
             FROM page_content
             GROUP BY page_name
             ORDER BY page_name",
        )
        .fetch_all(pool)
        .await
    }
}
