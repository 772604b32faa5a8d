//! Route definitions for the `/media` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::media;
use crate::state::AppState;

/// Routes mounted at `/media`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> upload (multipart: file, portfolio_id?)
/// GET    /stats  -> stats
/// GET    /{id}   -> get_by_id
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(media::list).post(media::upload))
        .route("/stats", get(media::stats))
        .route("/{id}", get(media::get_by_id).delete(media::delete))
}
