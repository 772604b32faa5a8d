//! Page content section entity model and DTOs.

use folio_core::page_content::SectionBody;
use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `page_content` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PageContent {
    pub id: DbId,
    pub page_name: String,
    pub section: String,
    pub title: Option<String>,
    pub content: String,
    pub content_type: String,
    pub updated_at: Timestamp,
}

impl SectionBody for PageContent {
    fn section_key(&self) -> &str {
        &self.section
    }

    fn body(&self) -> &str {
        &self.content
    }
}

/// DTO for creating a section.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePageContent {
    pub page_name: String,
    pub section: String,
    pub title: Option<String>,
    #[serde(default)]
    pub content: String,
    /// Defaults to `text` if omitted.
    pub content_type: Option<String>,
}

/// DTO for a partial update of a section. An empty `title` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePageContent {
    pub title: Option<String>,
    pub content: Option<String>,
    pub content_type: Option<String>,
}

/// DTO for a full write of a section addressed by path.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertPageContent {
    pub title: Option<String>,
    #[serde(default)]
    pub content: String,
    pub content_type: Option<String>,
}

/// One page and how many sections it has.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PageSummary {
    pub page_name: String,
    pub section_count: i64,
    pub last_updated: Timestamp,
}
