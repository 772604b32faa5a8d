use axum::routing::get;
use axum::Router;

use crate::handlers::setup;
use crate::state::AppState;

/// Routes mounted at `/setup`.
pub fn router() -> Router<AppState> {
    Router::new().route("/status", get(setup::status))
}
