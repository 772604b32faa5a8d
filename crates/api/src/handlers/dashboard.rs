//! Admin overview.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use folio_core::portfolio::RECENT_LIMIT;
use folio_db::models::dashboard::DashboardSummary;
use folio_db::repositories::{MediaRepo, PortfolioRepo};

use crate::error::AppResult;
use crate::handlers::portfolio::load_stats;
use crate::response::{data, DataResponse};
use crate::state::AppState;

/// GET /api/v1/dashboard
pub async fn overview(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DashboardSummary>>> {
    let portfolio = load_stats(&state).await?;
    let recent_items = PortfolioRepo::list_recent(&state.pool, RECENT_LIMIT).await?;
    let media = MediaRepo::totals(&state.pool).await?;

    Ok(data(DashboardSummary {
        portfolio,
        recent_items,
        media,
        last_updated: Utc::now(),
    }))
}
