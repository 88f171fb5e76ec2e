/// Name of the unique constraint guarding appointment transaction tokens.
pub const TRANSACTION_ID_CONSTRAINT: &str = "uq_appointments_transaction_id";

/// PostgreSQL SQLSTATE for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// Errors surfaced by a [`BookingStore`](crate::BookingStore).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The generated transaction token is already taken by another booking.
    #[error("Transaction id already in use")]
    DuplicateTransactionId,

    /// Any other connection, query, or constraint failure.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Return `true` if `err` is a unique violation of the named constraint.
pub fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
                && db_err.constraint() == Some(constraint)
        }
        _ => false,
    }
}
