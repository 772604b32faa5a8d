//! First-run readiness check for the admin dashboard.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::AppResult;
use crate::response::{data, DataResponse};
use crate::state::AppState;

/// Whether the backend is ready for the dashboard to be used.
#[derive(Debug, Serialize)]
pub struct SetupStatus {
    pub storage_configured: bool,
    pub database_reachable: bool,
    /// Required tables that do not exist yet.
    pub missing_tables: Vec<String>,
    pub ready: bool,
    /// Operator-facing hint for the first unmet requirement, if any.
    pub message: Option<String>,
}

impl SetupStatus {
    fn new(
        storage_configured: bool,
        database_reachable: bool,
        missing_tables: Vec<String>,
    ) -> Self {
        let message = if !storage_configured {
            Some("Storage is not configured. Set MEDIA_DIR and MEDIA_PUBLIC_URL.".to_string())
        } else if !database_reachable {
            Some("Database is not reachable. Check DATABASE_URL.".to_string())
        } else if !missing_tables.is_empty() {
            Some(format!(
                "Database tables not found: {}. Run the migrations.",
                missing_tables.join(", ")
            ))
        } else {
            None
        };

        Self {
            storage_configured,
            database_reachable,
            ready: message.is_none(),
            missing_tables,
            message,
        }
    }
}

/// GET /api/v1/setup/status
///
/// Always 200; an unreachable database is reported in the body.
pub async fn status(State(state): State<AppState>) -> AppResult<Json<DataResponse<SetupStatus>>> {
    let storage_configured = state.store.is_configured();

    let (database_reachable, missing_tables) = match folio_db::missing_tables(&state.pool).await {
        Ok(missing) => (true, missing),
        Err(err) => {
            tracing::warn!(error = %err, "Setup check could not query the database");
            (false, Vec::new())
        }
    };

    Ok(data(SetupStatus::new(
        storage_configured,
        database_reachable,
        missing_tables,
    )))
}
