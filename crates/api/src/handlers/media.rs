//! Handlers for the `/media` resource.
//!
//! Uploads write the object first and the row second; deletes remove the
//! object first and the row second. Neither pair is transactional: a failed
//! insert removes the object again, a failed object removal is logged and
//! the row is deleted anyway.

use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::media::{self, MediaKind};
use folio_core::storage::StorageError;
use folio_core::types::DbId;
use folio_db::models::media::{CreateMedia, Media, MediaFilter, MediaTotals};
use folio_db::repositories::{MediaRepo, PortfolioRepo};

use crate::error::{AppError, AppResult};
use crate::response::{data, DataResponse};
use crate::state::AppState;

const ENTITY: &str = "Media";

/// Fallback when the client sends a file part without a name.
const DEFAULT_FILE_NAME: &str = "upload";

/// GET /api/v1/media?kind=&search=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<MediaFilter>,
) -> AppResult<Json<DataResponse<Vec<Media>>>> {
    if let Some(kind) = filter.kind.as_deref() {
        MediaKind::from_name(kind)?;
    }
    let items = MediaRepo::list(&state.pool, &filter).await?;
    Ok(data(items))
}

/// GET /api/v1/media/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<DataResponse<MediaTotals>>> {
    let totals = MediaRepo::totals(&state.pool).await?;
    Ok(data(totals))
}

/// GET /api/v1/media/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Media>>> {
    let item = MediaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;
    Ok(data(item))
}

/// A file part pulled out of a multipart body.
struct UploadedFile {
    name: String,
    mime_type: String,
    bytes: Vec<u8>,
}

/// POST /api/v1/media
///
/// Multipart fields: `file` (required) and `portfolio_id` (optional).
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<Media>>)> {
    let mut file: Option<UploadedFile> = None;
    let mut portfolio_id: Option<DbId> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let file_name = field
                    .file_name()
                    .filter(|n| !n.trim().is_empty())
                    .unwrap_or(DEFAULT_FILE_NAME)
                    .to_string();
                let mime_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file = Some(UploadedFile {
                    name: file_name,
                    mime_type,
                    bytes: bytes.to_vec(),
                });
            }
            "portfolio_id" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                let text = text.trim();
                if !text.is_empty() {
                    let id = text.parse::<DbId>().map_err(|_| {
                        CoreError::Validation(format!("Invalid portfolio_id '{text}'"))
                    })?;
                    portfolio_id = Some(id);
                }
            }
            _ => {} // ignore unknown fields
        }
    }

    let file =
        file.ok_or_else(|| AppError::BadRequest("Missing required 'file' field".into()))?;

    let kind = media::validate_upload(
        &file.mime_type,
        file.bytes.len() as u64,
        state.config.media.max_upload_bytes,
    )?;

    if let Some(id) = portfolio_id {
        if PortfolioRepo::find_by_id(&state.pool, id).await?.is_none() {
            return Err(CoreError::not_found("PortfolioItem", id).into());
        }
    }

    let key = media::generate_object_key(&file.name, chrono::Utc::now().timestamp_millis());
    state.store.put(&key, &file.bytes).await?;

    let input = CreateMedia {
        name: file.name,
        url: state.store.public_url(&key),
        storage_key: key.clone(),
        kind: kind.name().to_string(),
        mime_type: file.mime_type,
        size: file.bytes.len() as i64,
        portfolio_id,
    };

    let created = match MediaRepo::create(&state.pool, &input).await {
        Ok(row) => row,
        Err(err) => {
            if let Err(cleanup) = state.store.remove(&key).await {
                tracing::warn!(
                    key = %key,
                    error = %cleanup,
                    "Failed to remove object after insert error"
                );
            }
            return Err(err.into());
        }
    };

    tracing::info!(
        id = created.id,
        key = %created.storage_key,
        size = %media::format_file_size(created.size as u64),
        "Media uploaded"
    );
    Ok((StatusCode::CREATED, data(created)))
}

/// DELETE /api/v1/media/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let item = MediaRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, id))?;

    match state.store.remove(&item.storage_key).await {
        Ok(()) => {}
        Err(StorageError::NotFound(key)) => {
            tracing::warn!(id, key = %key, "Stored object already missing, deleting row");
        }
        Err(err) => {
            tracing::warn!(
                id,
                key = %item.storage_key,
                error = %err,
                "Failed to remove stored object, deleting row anyway"
            );
        }
    }

    if MediaRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Media deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(CoreError::not_found(ENTITY, id).into())
    }
}
