//! Shared application router builder.
//!
//! Provides [`build_app_router`] so both the production binary (`main.rs`)
//! and integration tests (`tests/common/mod.rs`) use the exact same
//! middleware stack.

use std::time::Duration;

use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use makeup_core::api_key::API_KEY_HEADER;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::middleware::api_key::RequireApiKey;
use crate::routes;
use crate::state::AppState;

/// Build the full application [`Router`] with all middleware layers.
///
/// `/api/*` additionally requires the `X-API-KEY` header; a rejected
/// request never reaches its handler.
///
/// The middleware stack is applied bottom-up:
///
/// 1. CORS
/// 2. Set request ID on incoming requests
/// 3. Structured request/response tracing
/// 4. Propagate request ID to response
/// 5. Request timeout
/// 6. Panic recovery (catch panics, return 500)
pub fn build_app_router(state: AppState) -> Router {
    let config = state.config.clone();
    let cors = build_cors_layer(&config);
    let request_id_header = HeaderName::from_static("x-request-id");

    let api = routes::api_routes().route_layer(axum::middleware::from_extractor_with_state::<
        RequireApiKey,
        AppState,
    >(state.clone()));

    Router::new()
        // Health check at root level (not under /api).
        .merge(routes::health::router())
        // Public confirmation pages.
        .merge(routes::public_routes())
        // API-key protected routes.
        .nest("/api", api)
        // -- Middleware stack (applied bottom-up) --
        // Panic recovery: catch panics and return 500.
        .layer(CatchPanicLayer::new())
        // Request timeout.
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        // Propagate request ID to response.
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        // Structured request/response tracing.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Set request ID on incoming requests.
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        // CORS.
        .layer(cors)
        // Shared state.
        .with_state(state)
}

/// Build the CORS middleware layer from server configuration.
///
/// A `*` entry allows any origin. Panics at startup if any other configured
/// origin is invalid, so misconfiguration fails fast.
pub fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let allow_origin = if config.cors_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .map(|o| {
                o.parse()
                    .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
            })
            .collect();
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(API_KEY_HEADER)])
        .max_age(Duration::from_secs(3600))
}
