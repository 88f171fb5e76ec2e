//! Handlers for the `/categories` resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/categories
///
/// The static category catalogue. Never fails.
pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    Json(DataResponse {
        data: state.store.categories(),
    })
}
