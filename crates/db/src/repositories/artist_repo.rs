//! Repository for the `makeup_artists` table.

use sqlx::PgPool;

use crate::models::artist::Artist;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, profile_photo_url, short_key, service_params";

/// Read-only queries over bookable makeup artists.
pub struct ArtistRepo;

impl ArtistRepo {
    /// List every active, non-deleted artist, ordered by id.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Artist>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM makeup_artists \
             WHERE is_active = true AND is_deleted = false \
             ORDER BY id"
        );
        sqlx::query_as::<_, Artist>(&query).fetch_all(pool).await
    }

    /// Find an active, non-deleted artist by exact `short_key`.
    pub async fn find_by_short_key(
        pool: &PgPool,
        short_key: &str,
    ) -> Result<Option<Artist>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM makeup_artists \
             WHERE short_key = $1 AND is_active = true AND is_deleted = false"
        );
        sqlx::query_as::<_, Artist>(&query)
            .bind(short_key)
            .fetch_optional(pool)
            .await
    }
}
