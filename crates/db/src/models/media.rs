//! Media asset entity model and DTOs.

use folio_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `media` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Media {
    pub id: DbId,
    pub name: String,
    pub url: String,
    pub storage_key: String,
    pub kind: String,
    pub mime_type: String,
    pub size: i64,
    pub portfolio_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// DTO for recording an uploaded object. Built server-side after the bytes
/// are stored, never deserialized from a client.
#[derive(Debug, Clone)]
pub struct CreateMedia {
    pub name: String,
    pub url: String,
    pub storage_key: String,
    pub kind: String,
    pub mime_type: String,
    pub size: i64,
    pub portfolio_id: Option<DbId>,
}

/// Filters for listing media.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaFilter {
    pub kind: Option<String>,
    pub search: Option<String>,
}

/// Aggregate counters over the media library.
#[derive(Debug, Clone, Default, FromRow, Serialize)]
pub struct MediaTotals {
    pub count: i64,
    pub images: i64,
    pub videos: i64,
    pub total_bytes: i64,
}
