//! Handlers for the `/artists` and `/artist/{short_key}` resources.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use makeup_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/artists
///
/// List every active, non-deleted artist.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let artists = state.store.list_artists().await?;
    Ok(Json(DataResponse { data: artists }))
}

/// GET /api/artist/{short_key}
pub async fn get_by_short_key(
    State(state): State<AppState>,
    Path(short_key): Path<String>,
) -> AppResult<impl IntoResponse> {
    if short_key.trim().is_empty() {
        return Err(missing_key());
    }

    let artist = state
        .store
        .find_artist(&short_key)
        .await?
        .ok_or_else(|| CoreError::NotFound {
            entity: "Artist",
            key: short_key.clone(),
        })?;
    Ok(Json(DataResponse { data: artist }))
}

/// GET /api/artist and /api/artist/
pub async fn missing_short_key() -> AppError {
    missing_key()
}

fn missing_key() -> AppError {
    AppError::BadRequest("This method expects short-key parameters".into())
}
