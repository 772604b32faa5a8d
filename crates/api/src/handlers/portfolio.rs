//! Handlers for the `/portfolio` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::portfolio::{self, Category, PortfolioStats, PublishStatus};
use folio_core::types::DbId;
use folio_db::models::media::Media;
use folio_db::models::portfolio::{
    CreatePortfolioItem, PortfolioFilter, PortfolioItem, UpdatePortfolioItem,
};
use folio_db::repositories::{MediaRepo, PortfolioRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::response::{data, DataResponse};
use crate::state::AppState;

const ENTITY: &str = "PortfolioItem";

/// GET /api/v1/portfolio?category=&status=&search=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<PortfolioFilter>,
) -> AppResult<Json<DataResponse<Vec<PortfolioItem>>>> {
    if let Some(category) = filter.category.as_deref() {
        Category::from_name(category)?;
    }
    if let Some(status) = filter.status.as_deref() {
        PublishStatus::from_name(status)?;
    }
    let items = PortfolioRepo::list(&state.pool, &filter).await?;
    Ok(data(items))
}

/// GET /api/v1/portfolio/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<PortfolioItem>>> {
    let item = find_or_404(&state, id).await?;
    Ok(data(item))
}

/// POST /api/v1/portfolio
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePortfolioItem>,
) -> AppResult<(StatusCode, Json<DataResponse<PortfolioItem>>)> {
    let input = prepare_create(input)?;
    let item = PortfolioRepo::create(&state.pool, &input).await?;
    tracing::info!(id = item.id, category = %item.category, "Portfolio item created");
    Ok((StatusCode::CREATED, data(item)))
}

/// PUT /api/v1/portfolio/{id}
///
/// Partial update: omitted fields keep their current value.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePortfolioItem>,
) -> AppResult<Json<DataResponse<PortfolioItem>>> {
    let input = prepare_update(input)?;
    let item = PortfolioRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(data(item))
}

/// DELETE /api/v1/portfolio/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if PortfolioRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Portfolio item deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found(ENTITY, id).into())
    }
}

/// GET /api/v1/portfolio/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<DataResponse<PortfolioStats>>> {
    Ok(data(load_stats(&state).await?))
}

/// One public portfolio section and how many items it holds.
#[derive(Debug, Serialize)]
pub struct CategorySummary {
    pub name: &'static str,
    pub label: &'static str,
    pub count: i64,
}

/// GET /api/v1/portfolio/categories
pub async fn categories(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<CategorySummary>>>> {
    let stats = load_stats(&state).await?;
    Ok(data(summarize_categories(&stats)))
}

/// GET /api/v1/portfolio/featured
///
/// Published, featured items for the homepage strip.
pub async fn featured(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<PortfolioItem>>>> {
    let items = PortfolioRepo::list_featured(&state.pool, portfolio::FEATURED_LIMIT).await?;
    Ok(data(items))
}

/// GET /api/v1/portfolio/{id}/media
pub async fn list_media(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Media>>>> {
    find_or_404(&state, id).await?;
    let media = MediaRepo::list_by_portfolio(&state.pool, id).await?;
    Ok(data(media))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn find_or_404(state: &AppState, id: DbId) -> AppResult<PortfolioItem> {
    let item = PortfolioRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(item)
}

/// Aggregate category/status counts across every item.
pub(crate) async fn load_stats(state: &AppState) -> AppResult<PortfolioStats> {
    let pairs = PortfolioRepo::category_status_pairs(&state.pool).await?;
    Ok(PortfolioStats::from_pairs(
        pairs.iter().map(|(c, s)| (c.as_str(), s.as_str())),
    ))
}

fn summarize_categories(stats: &PortfolioStats) -> Vec<CategorySummary> {
    Category::ALL
        .into_iter()
        .map(|category| CategorySummary {
            name: category.name(),
            label: category.label(),
            count: stats.for_category(category),
        })
        .collect()
}

/// Validate a create payload and normalise blank optionals and tags.
fn prepare_create(input: CreatePortfolioItem) -> Result<CreatePortfolioItem, CoreError> {
    portfolio::validate_title(&input.title)?;
    Category::from_name(&input.category)?;
    portfolio::validate_image_url(&input.image_url)?;
    if let Some(status) = input.status.as_deref() {
        PublishStatus::from_name(status)?;
    }
    let tags = portfolio::normalize_tags(&input.tags);
    portfolio::validate_tags(&tags)?;

    Ok(CreatePortfolioItem {
        title: input.title.trim().to_string(),
        description: portfolio::normalize_optional(input.description.as_deref()),
        image_url: input.image_url.trim().to_string(),
        video_url: portfolio::normalize_optional(input.video_url.as_deref()),
        tags,
        ..input
    })
}

/// Validate the fields present in an update payload.
///
/// `description` and `video_url` pass through untouched so a blank string
/// can clear them.
fn prepare_update(input: UpdatePortfolioItem) -> Result<UpdatePortfolioItem, CoreError> {
    if let Some(title) = input.title.as_deref() {
        portfolio::validate_title(title)?;
    }
    if let Some(category) = input.category.as_deref() {
        Category::from_name(category)?;
    }
    if let Some(url) = input.image_url.as_deref() {
        portfolio::validate_image_url(url)?;
    }
    if let Some(status) = input.status.as_deref() {
        PublishStatus::from_name(status)?;
    }
    let tags = match input.tags.as_deref() {
        Some(raw) => {
            let tags = portfolio::normalize_tags(raw);
            portfolio::validate_tags(&tags)?;
            Some(tags)
        }
        None => None,
    };

    Ok(UpdatePortfolioItem {
        title: input.title.map(|t| t.trim().to_string()),
        image_url: input.image_url.map(|u| u.trim().to_string()),
        tags,
        ..input
    })
}
