//! Repository for the `appointments` table.

use sqlx::PgPool;

use crate::models::appointment::{Appointment, CreateAppointment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, makeup_artist_id, first_name, last_name, phone_number, email, \
                       district, due_date, message, prefer_time_period_in_day, \
                       transaction_id, is_viewed, created_at";

/// Insert and lookup operations for booking requests.
pub struct AppointmentRepo;

impl AppointmentRepo {
    /// Insert a new appointment, returning the created row.
    ///
    /// `is_viewed` always starts as `false`.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAppointment,
    ) -> Result<Appointment, sqlx::Error> {
        let query = format!(
            "INSERT INTO appointments \
                (makeup_artist_id, first_name, last_name, phone_number, email, district, \
                 due_date, message, prefer_time_period_in_day, transaction_id, is_viewed) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, false) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Appointment>(&query)
            .bind(input.makeup_artist_id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.phone_number)
            .bind(&input.email)
            .bind(&input.district)
            .bind(input.due_date)
            .bind(&input.message)
            .bind(&input.prefer_time_period_in_day)
            .bind(&input.transaction_id)
            .fetch_one(pool)
            .await
    }

    /// Find an appointment by its public transaction token.
    pub async fn find_by_transaction_id(
        pool: &PgPool,
        transaction_id: &str,
    ) -> Result<Option<Appointment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM appointments WHERE transaction_id = $1");
        sqlx::query_as::<_, Appointment>(&query)
            .bind(transaction_id)
            .fetch_optional(pool)
            .await
    }

    /// Flag an appointment as viewed. Returns `false` if it was already
    /// viewed or does not exist.
    pub async fn mark_viewed(pool: &PgPool, transaction_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE appointments SET is_viewed = true \
             WHERE transaction_id = $1 AND is_viewed = false",
        )
        .bind(transaction_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
