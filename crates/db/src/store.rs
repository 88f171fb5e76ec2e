//! The data-access capability set consumed by the HTTP layer.
//!
//! Handlers depend on `Arc<dyn BookingStore>` rather than a concrete pool so
//! the request path can be exercised without a database.

use async_trait::async_trait;
use makeup_core::category::{all_categories, Category};

use crate::error::{is_unique_violation, StoreError, TRANSACTION_ID_CONSTRAINT};
use crate::models::appointment::{Appointment, CreateAppointment};
use crate::models::artist::Artist;
use crate::repositories::{AppointmentRepo, ArtistRepo};
use crate::DbPool;

#[async_trait]
pub trait BookingStore: Send + Sync {
    /// The fixed category catalogue. Never touches storage.
    fn categories(&self) -> Vec<Category> {
        all_categories()
    }

    /// All active, non-deleted artists. An empty list is not an error.
    async fn list_artists(&self) -> Result<Vec<Artist>, StoreError>;

    /// Exact-match lookup by public short key.
    async fn find_artist(&self, short_key: &str) -> Result<Option<Artist>, StoreError>;

    /// Persist a booking request.
    ///
    /// Returns [`StoreError::DuplicateTransactionId`] when the token is taken.
    async fn create_appointment(
        &self,
        input: &CreateAppointment,
    ) -> Result<Appointment, StoreError>;

    /// Exact-match lookup by transaction token.
    async fn find_appointment(&self, transaction_id: &str)
        -> Result<Option<Appointment>, StoreError>;

    /// Flag a booking as viewed on its confirmation page.
    async fn mark_appointment_viewed(&self, transaction_id: &str) -> Result<bool, StoreError>;

    /// Verify the backing store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// [`BookingStore`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgBookingStore {
    pool: DbPool,
}

impl PgBookingStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for PgBookingStore {
    async fn list_artists(&self) -> Result<Vec<Artist>, StoreError> {
        Ok(ArtistRepo::list_active(&self.pool).await?)
    }

    async fn find_artist(&self, short_key: &str) -> Result<Option<Artist>, StoreError> {
        Ok(ArtistRepo::find_by_short_key(&self.pool, short_key).await?)
    }

    async fn create_appointment(
        &self,
        input: &CreateAppointment,
    ) -> Result<Appointment, StoreError> {
        AppointmentRepo::create(&self.pool, input)
            .await
            .map_err(|err| {
                if is_unique_violation(&err, TRANSACTION_ID_CONSTRAINT) {
                    StoreError::DuplicateTransactionId
                } else {
                    StoreError::Database(err)
                }
            })
    }

    async fn find_appointment(
        &self,
        transaction_id: &str,
    ) -> Result<Option<Appointment>, StoreError> {
        Ok(AppointmentRepo::find_by_transaction_id(&self.pool, transaction_id).await?)
    }

    async fn mark_appointment_viewed(&self, transaction_id: &str) -> Result<bool, StoreError> {
        Ok(AppointmentRepo::mark_viewed(&self.pool, transaction_id).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(crate::health_check(&self.pool).await?)
    }
}
