//! Route definitions for the `/portfolio` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::portfolio;
use crate::state::AppState;

/// Routes mounted at `/portfolio`.
///
/// ```text
/// GET    /             -> list
/// POST   /             -> create
/// GET    /categories   -> categories
/// GET    /featured     -> featured
/// GET    /stats        -> stats
/// GET    /{id}         -> get_by_id
/// PUT    /{id}         -> update
/// DELETE /{id}         -> delete
/// GET    /{id}/media   -> list_media
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(portfolio::list).post(portfolio::create))
        .route("/categories", get(portfolio::categories))
        .route("/featured", get(portfolio::featured))
        .route("/stats", get(portfolio::stats))
        .route(
            "/{id}",
            get(portfolio::get_by_id)
                .put(portfolio::update)
                .delete(portfolio::delete),
        )
        .route("/{id}/media", get(portfolio::list_media))
}
