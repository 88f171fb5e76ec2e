//! Static API-key authentication for the `/api` routes.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use makeup_core::api_key::{verify_api_key, API_KEY_HEADER};
use makeup_core::error::CoreError;

use crate::error::AppError;
use crate::state::AppState;

/// Proof that the request carried the configured `X-API-KEY` header.
///
/// Applied to the whole `/api` tree as a route layer so a rejected request
/// never reaches a handler:
///
/// ```ignore
/// router.route_layer(axum::middleware::from_extractor_with_state::<RequireApiKey, _>(state))
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequireApiKey;

impl FromRequestParts<AppState> for RequireApiKey {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let presented = parts
            .headers
            .get(API_KEY_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();

        if !verify_api_key(presented, &state.config.api_key) {
            tracing::warn!(
                method = %parts.method,
                path = %parts.uri.path(),
                "Rejected request with missing or invalid API key"
            );
            return Err(AppError::Core(CoreError::Unauthorized(
                "Access is denied".into(),
            )));
        }

        Ok(RequireApiKey)
    }
}
