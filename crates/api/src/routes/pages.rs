//! Route definitions for page content sections.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Routes mounted at `/pages`.
///
/// ```text
/// GET    /                                   -> list_pages
/// POST   /sections                           -> create
/// GET    /sections/predefined                -> predefined
/// GET    /{page}                             -> list_page
/// GET    /{page}/sections/{section}          -> get_section
/// PUT    /{page}/sections/{section}          -> upsert
/// PATCH  /{page}/sections/{section}          -> update
/// DELETE /{page}/sections/{section}          -> delete
/// GET    /{page}/sections/{section}/resolved -> resolve
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::list_pages))
        .route("/sections", post(pages::create))
        .route("/sections/predefined", get(pages::predefined))
        .route("/{page}", get(pages::list_page))
        .route(
            "/{page}/sections/{section}",
            get(pages::get_section)
                .put(pages::upsert)
                .patch(pages::update)
                .delete(pages::delete),
        )
        .route("/{page}/sections/{section}/resolved", get(pages::resolve))
}
