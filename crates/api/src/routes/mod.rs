pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree. Every route here requires `X-API-KEY`.
///
/// Route hierarchy:
///
/// ```text
/// /categories                  list (GET)
/// /artists                     list (GET)
/// /artist                      400, key missing
/// /artist/{short_key}          get (GET)
/// /appointment                 create (POST), any other method -> 404
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(handlers::category::list))
        .route("/artists", get(handlers::artist::list))
        .route("/artist", get(handlers::artist::missing_short_key))
        .route("/artist/", get(handlers::artist::missing_short_key))
        .route(
            "/artist/{short_key}",
            get(handlers::artist::get_by_short_key),
        )
        .route(
            "/appointment",
            post(handlers::appointment::create)
                .fallback(handlers::appointment::unsupported_method),
        )
}

/// Public, unauthenticated pages.
///
/// ```text
/// /t/{transaction_id}          booking confirmation page (HTML)
/// ```
pub fn public_routes() -> Router<AppState> {
    Router::new().route(
        "/t/{transaction_id}",
        get(handlers::confirmation::show),
    )
}
