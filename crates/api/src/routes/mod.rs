pub mod dashboard;
pub mod health;
pub mod media;
pub mod pages;
pub mod portfolio;
pub mod setup;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /portfolio                                       list, create
/// /portfolio/categories                            sections with labels + counts
/// /portfolio/featured                              published + featured (max 6)
/// /portfolio/stats                                 counts by category/status
/// /portfolio/{id}                                  get, update, delete
/// /portfolio/{id}/media                            media attached to an item
///
/// /media                                           list, upload (multipart)
/// /media/stats                                     counts by kind, total size
/// /media/{id}                                      get, delete
///
/// /pages                                           page summaries
/// /pages/sections                                  create section
/// /pages/sections/predefined                       known landing-page slots
/// /pages/{page}                                    sections of one page
/// /pages/{page}/sections/{section}                 get, upsert, patch, delete
/// /pages/{page}/sections/{section}/resolved        content with fallbacks
///
/// /dashboard                                       admin overview
/// /setup/status                                    storage + schema readiness
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/portfolio", portfolio::router())
        .nest("/media", media::router())
        .nest("/pages", pages::router())
        .nest("/dashboard", dashboard::router())
        .nest("/setup", setup::router())
}
