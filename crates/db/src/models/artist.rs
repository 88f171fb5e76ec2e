//! Makeup artist (provider) model.

use makeup_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `makeup_artists` table, as exposed to API clients.
///
/// Serialized with the public field names (`image`, `services`) clients
/// already consume.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub id: DbId,
    pub first_name: String,
    pub last_name: String,
    #[sqlx(rename = "profile_photo_url")]
    #[serde(rename = "image")]
    pub image_url: String,
    pub short_key: String,
    #[serde(rename = "services")]
    pub service_params: String,
}
