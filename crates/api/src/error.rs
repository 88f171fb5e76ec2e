use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use makeup_core::error::CoreError;
use makeup_db::StoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for data-access
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`] to
/// produce consistent JSON error responses inside the `{ "data": null }`
/// envelope.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `makeup_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A data-access error from `makeup_db`.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The route exists but does not accept this method. Reported as 404.
    #[error("Unsupported method: {0}")]
    UnsupportedMethod(&'static str),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, key } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with key {key} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal_error()
                }
            },

            // --- Store errors ---
            // Collisions are retried in the handler; one that escapes is a
            // server fault.
            AppError::Store(StoreError::DuplicateTransactionId) => {
                tracing::error!("Transaction id collision reached the error mapper");
                internal_error()
            }
            AppError::Store(StoreError::Database(err)) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::UnsupportedMethod(msg) => {
                (StatusCode::NOT_FOUND, "UNSUPPORTED_METHOD", (*msg).to_string())
            }
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal_error()
            }
        };

        let body = json!({
            "data": null,
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        other => {
            tracing::error!(error = %other, "Database error");
            internal_error()
        }
    }
}
