//! Handlers for page content sections.
//!
//! Sections are keyed by `(page, section)` in the path. `PUT` writes the
//! whole section (creating it if needed); `PATCH` changes only the fields
//! present and requires the section to exist.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::page_content::{
    self, ContentType, PredefinedSection, CONTENT_TYPE_TEXT, HOME_PAGE, PREDEFINED_HOME_SECTIONS,
};
use folio_db::models::page_content::{
    CreatePageContent, PageContent, PageSummary, UpdatePageContent, UpsertPageContent,
};
use folio_db::repositories::PageContentRepo;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::response::{data, DataResponse};
use crate::state::AppState;

const ENTITY: &str = "PageContent";

/// GET /api/v1/pages
pub async fn list_pages(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<PageSummary>>>> {
    let pages = PageContentRepo::list_pages(&state.pool).await?;
    Ok(data(pages))
}

/// A home page slot and whether it has stored content.
#[derive(Debug, Serialize)]
pub struct PredefinedStatus {
    #[serde(flatten)]
    pub slot: PredefinedSection,
    pub configured: bool,
}

/// GET /api/v1/pages/sections/predefined
pub async fn predefined(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<PredefinedStatus>>>> {
    let stored = PageContentRepo::list_by_page(&state.pool, HOME_PAGE).await?;
    let slots = PREDEFINED_HOME_SECTIONS
        .iter()
        .map(|slot| PredefinedStatus {
            slot: *slot,
            configured: stored.iter().any(|s| s.section == slot.section),
        })
        .collect();
    Ok(data(slots))
}

/// GET /api/v1/pages/{page}
///
/// An unknown page is an empty list, not a 404.
pub async fn list_page(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> AppResult<Json<DataResponse<Vec<PageContent>>>> {
    page_content::validate_page_name(&page)?;
    let sections = PageContentRepo::list_by_page(&state.pool, &page).await?;
    Ok(data(sections))
}

/// GET /api/v1/pages/{page}/sections/{section}
pub async fn get_section(
    State(state): State<AppState>,
    Path((page, section)): Path<(String, String)>,
) -> AppResult<Json<DataResponse<PageContent>>> {
    validate_path(&page, &section)?;
    let row = find_or_404(&state, &page, &section).await?;
    Ok(data(row))
}

/// POST /api/v1/pages/sections
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePageContent>,
) -> AppResult<(StatusCode, Json<DataResponse<PageContent>>)> {
    validate_path(&input.page_name, &input.section)?;
    page_content::validate_section_title(input.title.as_deref())?;
    let content_type = effective_type(input.content_type.as_deref(), CONTENT_TYPE_TEXT)?;
    page_content::validate_content(content_type, &input.content)?;

    let row = PageContentRepo::create(&state.pool, &input).await?;
    tracing::info!(page = %row.page_name, section = %row.section, "Page section created");
    Ok((StatusCode::CREATED, data(row)))
}

/// PUT /api/v1/pages/{page}/sections/{section}
pub async fn upsert(
    State(state): State<AppState>,
    Path((page, section)): Path<(String, String)>,
    Json(input): Json<UpsertPageContent>,
) -> AppResult<Json<DataResponse<PageContent>>> {
    validate_path(&page, &section)?;
    page_content::validate_section_title(input.title.as_deref())?;
    let content_type = effective_type(input.content_type.as_deref(), CONTENT_TYPE_TEXT)?;
    page_content::validate_content(content_type, &input.content)?;

    let row = PageContentRepo::upsert(&state.pool, &page, &section, &input).await?;
    tracing::info!(page = %row.page_name, section = %row.section, "Page section saved");
    Ok(data(row))
}

/// PATCH /api/v1/pages/{page}/sections/{section}
///
/// JSON content is checked against the type the section will have after
/// the update, so switching a text section to `json` validates its
/// existing body.
pub async fn update(
    State(state): State<AppState>,
    Path((page, section)): Path<(String, String)>,
    Json(input): Json<UpdatePageContent>,
) -> AppResult<Json<DataResponse<PageContent>>> {
    validate_path(&page, &section)?;
    page_content::validate_section_title(input.title.as_deref())?;

    let existing = find_or_404(&state, &page, &section).await?;
    let content_type = effective_type(input.content_type.as_deref(), &existing.content_type)?;
    let content = input.content.as_deref().unwrap_or(&existing.content);
    page_content::validate_content(content_type, content)?;

    let row = PageContentRepo::update(&state.pool, &page, &section, &input)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, format!("{page}/{section}")))?;
    Ok(data(row))
}

/// DELETE /api/v1/pages/{page}/sections/{section}
pub async fn delete(
    State(state): State<AppState>,
    Path((page, section)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    validate_path(&page, &section)?;
    if PageContentRepo::delete(&state.pool, &page, &section).await? {
        tracing::info!(page = %page, section = %section, "Page section deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found(ENTITY, format!("{page}/{section}")).into())
    }
}

/// Query parameters for [`resolve`].
#[derive(Debug, Default, Deserialize)]
pub struct ResolveParams {
    /// Returned as `content` when the section is missing or empty.
    pub fallback: Option<String>,
    /// Returned as `title` when the section is missing or has none.
    pub fallback_title: Option<String>,
}

/// What the public site renders for one section.
#[derive(Debug, Serialize)]
pub struct ResolvedSection {
    pub page_name: String,
    pub section: String,
    pub title: Option<String>,
    pub content: String,
    pub content_type: String,
    /// `true` when `content` came from the stored row.
    pub from_store: bool,
}

/// GET /api/v1/pages/{page}/sections/{section}/resolved?fallback=&fallback_title=
///
/// Never 404s: a missing section resolves to the supplied fallbacks.
pub async fn resolve(
    State(state): State<AppState>,
    Path((page, section)): Path<(String, String)>,
    Query(params): Query<ResolveParams>,
) -> AppResult<Json<DataResponse<ResolvedSection>>> {
    validate_path(&page, &section)?;
    let stored = PageContentRepo::find(&state.pool, &page, &section).await?;
    Ok(data(resolve_section(page, section, stored, params)))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn validate_path(page: &str, section: &str) -> Result<(), CoreError> {
    page_content::validate_page_name(page)?;
    page_content::validate_key("section", section)
}

fn effective_type(requested: Option<&str>, current: &str) -> Result<ContentType, CoreError> {
    ContentType::from_name(requested.unwrap_or(current))
}

async fn find_or_404(state: &AppState, page: &str, section: &str) -> AppResult<PageContent> {
    let row = PageContentRepo::find(&state.pool, page, section)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, format!("{page}/{section}")))?;
    Ok(row)
}

fn resolve_section(
    page: String,
    section: String,
    stored: Option<PageContent>,
    params: ResolveParams,
) -> ResolvedSection {
    let fallback = params.fallback.unwrap_or_default();
    let rows: Vec<PageContent> = stored.into_iter().collect();
    let content = page_content::section_or(&rows, &section, &fallback).to_string();
    let from_store = rows.first().is_some_and(|r| !r.content.is_empty());

    let (title, content_type) = match rows.into_iter().next() {
        Some(row) => (row.title.or(params.fallback_title), row.content_type),
        None => (params.fallback_title, CONTENT_TYPE_TEXT.to_string()),
    };

    ResolvedSection {
        page_name: page,
        section,
        title,
        content,
        content_type,
        from_store,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn row(content: &str, title: Option<&str>) -> PageContent {
        PageContent {
            id: 1,
            page_name: "home".into(),
            section: "hero-title".into(),
            title: title.map(str::to_string),
            content: content.into(),
            content_type: "html".into(),
            updated_at: Utc::now(),
        }
    }

    fn params(fallback: &str, title: Option<&str>) -> ResolveParams {
        ResolveParams {
            fallback: Some(fallback.into()),
            fallback_title: title.map(str::to_string),
        }
    }

    #[test]
    fn resolves_stored_content() {
        let out = resolve_section(
            "home".into(),
            "hero-title".into(),
            Some(row("Capturing Moments", Some("Hero"))),
            params("Default", Some("Fallback")),
        );
        assert_eq!(out.content, "Capturing Moments");
        assert_eq!(out.title.as_deref(), Some("Hero"));
        assert_eq!(out.content_type, "html");
        assert!(out.from_store);
    }

    #[test]
    fn empty_body_uses_fallback() {
        let out = resolve_section(
            "home".into(),
            "hero-title".into(),
            Some(row("", None)),
            params("Default", Some("Fallback")),
        );
        assert_eq!(out.content, "Default");
        assert_eq!(out.title.as_deref(), Some("Fallback"));
        assert!(!out.from_store);
    }

    #[test]
    fn missing_section_is_plain_text_fallback() {
        let out = resolve_section(
            "home".into(),
            "about-text".into(),
            None,
            ResolveParams::default(),
        );
        assert_eq!(out.content, "");
        assert_eq!(out.title, None);
        assert_eq!(out.content_type, CONTENT_TYPE_TEXT);
        assert!(!out.from_store);
    }

    #[test]
    fn effective_type_prefers_request() {
        assert_eq!(effective_type(Some("json"), "text").unwrap(), ContentType::Json);
        assert_eq!(effective_type(None, "html").unwrap(), ContentType::Html);
        assert!(effective_type(Some("markdown"), "text").is_err());
    }

    #[test]
    fn path_keys_are_validated() {
        assert!(validate_path("home", "hero-title").is_ok());
        assert!(validate_path("Home", "hero-title").is_err());
        assert!(validate_path("home", "hero_title").is_err());
        assert!(validate_path("sections", "hero-title").is_err());
    }
}
