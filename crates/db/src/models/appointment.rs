//! Appointment entity model and DTOs.

use chrono::NaiveDateTime;
use makeup_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `appointments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: DbId,
    pub makeup_artist_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub district: String,
    pub due_date: NaiveDateTime,
    pub message: String,
    pub prefer_time_period_in_day: String,
    pub transaction_id: String,
    pub is_viewed: bool,
    pub created_at: Timestamp,
}

/// Booking request body accepted by `POST /api/appointment`.
///
/// Missing fields decode to empty values and are then caught by
/// [`Validate`]; `due_date` stays a raw string until the handler parses it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct AppointmentRequest {
    #[serde(rename = "makeUpArtistID")]
    #[validate(range(min = 1, message = "makeUpArtistID must be a positive id"))]
    pub makeup_artist_id: DbId,
    #[validate(length(min = 1, message = "firstName is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "lastName is required"))]
    pub last_name: String,
    #[validate(length(min = 1, message = "phoneNumber is required"))]
    pub phone_number: String,
    pub email: String,
    pub district: String,
    pub message: String,
    pub prefer_time_period_in_day: String,
    pub due_date: String,
}

impl AppointmentRequest {
    /// Build the insert DTO once the due date is parsed and a token is chosen.
    pub fn to_create(&self, due_date: NaiveDateTime, transaction_id: String) -> CreateAppointment {
        CreateAppointment {
            makeup_artist_id: self.makeup_artist_id,
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone_number: self.phone_number.clone(),
            email: self.email.clone(),
            district: self.district.clone(),
            due_date,
            message: self.message.clone(),
            prefer_time_period_in_day: self.prefer_time_period_in_day.clone(),
            transaction_id,
        }
    }
}

/// DTO for inserting a new appointment.
#[derive(Debug, Clone)]
pub struct CreateAppointment {
    pub makeup_artist_id: DbId,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub district: String,
    pub due_date: NaiveDateTime,
    pub message: String,
    pub prefer_time_period_in_day: String,
    pub transaction_id: String,
}
