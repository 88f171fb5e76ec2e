//! Handlers for the `/appointment` resource.
//!
//! Creating a booking parses the due date, allocates a transaction token,
//! persists the row, and then notifies the business by SMS. The SMS is
//! best-effort: its outcome is logged and never changes the response.

use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::NaiveDateTime;
use makeup_core::booking::{
    booking_notification_text, generate_transaction_id, parse_due_date,
    MAX_TRANSACTION_ID_ATTEMPTS,
};
use makeup_core::error::CoreError;
use makeup_db::models::appointment::{Appointment, AppointmentRequest};
use makeup_db::{BookingStore, StoreError};
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/appointment
///
/// The body is decoded as JSON whatever its `Content-Type`. Returns
/// `{"data": "success"}` once the booking is stored, whether or not the SMS
/// notification went out.
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let input: AppointmentRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {e}")))?;
    input
        .validate()
        .map_err(|e| CoreError::Validation(e.to_string()))?;
    let due_date = parse_due_date(&input.due_date)?;

    let appointment = insert_with_fresh_token(state.store.as_ref(), &input, due_date).await?;

    tracing::info!(
        appointment_id = appointment.id,
        makeup_artist_id = appointment.makeup_artist_id,
        transaction_id = %appointment.transaction_id,
        "Appointment created",
    );

    let text = booking_notification_text(
        &state.config.appointment_view_url,
        &appointment.transaction_id,
    );
    if !state.sms.send(&state.config.sms_recipients, &text).await {
        tracing::warn!(
            transaction_id = %appointment.transaction_id,
            "Booking notification was not delivered",
        );
    }

    Ok(Json(DataResponse { data: "success" }))
}

/// Any non-POST request to /api/appointment.
pub async fn unsupported_method() -> AppError {
    AppError::UnsupportedMethod("this method allow only POST request")
}

/// Insert the booking, drawing a new token whenever the store reports a
/// collision.
async fn insert_with_fresh_token(
    store: &dyn BookingStore,
    input: &AppointmentRequest,
    due_date: NaiveDateTime,
) -> AppResult<Appointment> {
    for attempt in 1..=MAX_TRANSACTION_ID_ATTEMPTS {
        let create = input.to_create(due_date, generate_transaction_id());
        match store.create_appointment(&create).await {
            Ok(appointment) => return Ok(appointment),
            Err(StoreError::DuplicateTransactionId) => {
                tracing::warn!(
                    attempt,
                    transaction_id = %create.transaction_id,
                    "Transaction id collision, regenerating",
                );
            }
            Err(err) => return Err(err.into()),
        }
    }

    Err(CoreError::Internal(format!(
        "no unique transaction id after {MAX_TRANSACTION_ID_ATTEMPTS} attempts"
    ))
    .into())
}
