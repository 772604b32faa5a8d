//! Dashboard overview payload.

use folio_core::portfolio::PortfolioStats;
use folio_core::types::Timestamp;
use serde::Serialize;

use crate::models::media::MediaTotals;
use crate::models::portfolio::RecentPortfolioItem;

/// Everything the admin overview tab shows in one response.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub portfolio: PortfolioStats,
    pub recent_items: Vec<RecentPortfolioItem>,
    pub media: MediaTotals,
    pub last_updated: Timestamp,
}
