//! Booking rules: due-date parsing, transaction tokens, and notification text.

use chrono::NaiveDateTime;
use rand::Rng;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Wire format of `dueDate` in booking requests (`YYYY-MM-DD HH:MM:SS`).
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Length of a generated transaction token.
pub const TRANSACTION_ID_LENGTH: usize = 8;

/// How many fresh tokens to try before giving up on a booking.
pub const MAX_TRANSACTION_ID_ATTEMPTS: usize = 3;

/// Prefix of the SMS sent to the business for every new booking request.
pub const NOTIFICATION_PREFIX: &str = "Talep: ";

// ---------------------------------------------------------------------------
// Due date
// ---------------------------------------------------------------------------

/// Parse a `dueDate` string in [`DUE_DATE_FORMAT`].
///
/// The value carries no timezone and is stored as-is.
pub fn parse_due_date(raw: &str) -> Result<NaiveDateTime, CoreError> {
    NaiveDateTime::parse_from_str(raw, DUE_DATE_FORMAT).map_err(|e| {
        CoreError::Validation(format!(
            "dueDate '{raw}' must use the format YYYY-MM-DD HH:MM:SS ({e})"
        ))
    })
}

/// Format a due date back into [`DUE_DATE_FORMAT`].
pub fn format_due_date(value: &NaiveDateTime) -> String {
    value.format(DUE_DATE_FORMAT).to_string()
}

// ---------------------------------------------------------------------------
// Transaction token
// ---------------------------------------------------------------------------

/// Generate a random alphanumeric transaction token.
///
/// Tokens are not guaranteed unique; callers rely on the database constraint
/// and regenerate on collision.
pub fn generate_transaction_id() -> String {
    rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(TRANSACTION_ID_LENGTH)
        .map(char::from)
        .collect()
}

// ---------------------------------------------------------------------------
// Notification
// ---------------------------------------------------------------------------

/// Build the SMS text announcing a new booking.
///
/// `view_url` is the public confirmation page prefix the token is appended to.
pub fn booking_notification_text(view_url: &str, transaction_id: &str) -> String {
    format!("{NOTIFICATION_PREFIX}{view_url}{transaction_id}")
}
