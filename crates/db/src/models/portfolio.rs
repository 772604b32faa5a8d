//! Portfolio item entity model and DTOs.

use folio_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `portfolio` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PortfolioItem {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub image_url: String,
    pub video_url: Option<String>,
    pub tags: Vec<String>,
    pub date: Date,
    pub featured: bool,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a portfolio item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePortfolioItem {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub image_url: String,
    pub video_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Defaults to today if omitted.
    pub date: Option<Date>,
    /// Defaults to `false` if omitted.
    pub featured: Option<bool>,
    /// Defaults to `draft` if omitted.
    pub status: Option<String>,
}

/// DTO for updating a portfolio item. Only provided fields change.
///
/// For `description` and `video_url`, an empty string clears the value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePortfolioItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub date: Option<Date>,
    pub featured: Option<bool>,
    pub status: Option<String>,
}

/// Filters for listing portfolio items. `None` means no constraint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortfolioFilter {
    pub category: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
}

/// Trimmed-down row for the dashboard's recent activity list.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct RecentPortfolioItem {
    pub id: DbId,
    pub title: String,
    pub category: String,
    pub status: String,
    pub created_at: Timestamp,
}
