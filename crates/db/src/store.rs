//! [`HotelStore`] backed by PostgreSQL.

use async_trait::async_trait;
use hotel_core::error::CoreError;
use hotel_core::hotel::Hotel;
use hotel_core::store::HotelStore;
use hotel_core::types::DbId;

use crate::repositories::HotelRepo;
use crate::DbPool;

/// Stores hotels in the `hotels` table; ids come from its identity column.
#[derive(Clone)]
pub struct PgHotelStore {
    pool: DbPool,
}

impl PgHotelStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Wrap a driver error as a storage failure carrying the full driver detail.
///
/// Not logged here; the API error mapping logs it once and keeps it out of
/// the response body.
fn storage_error(op: &'static str, err: sqlx::Error) -> CoreError {
    CoreError::Storage(format!("{op} failed: {err}"))
}

#[async_trait]
impl HotelStore for PgHotelStore {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn save(&self, hotel: Hotel) -> Result<Hotel, CoreError> {
        match hotel.id {
            Some(id) => HotelRepo::update(&self.pool, id, &hotel)
                .await
                .map_err(|e| storage_error("update hotel", e))?
                .map(Hotel::from)
                .ok_or(CoreError::NotFound { entity: "Hotel", id }),
            None => HotelRepo::create(&self.pool, &hotel)
                .await
                .map(Hotel::from)
                .map_err(|e| storage_error("insert hotel", e)),
        }
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Hotel>, CoreError> {
        let row = HotelRepo::find_by_id(&self.pool, id)
            .await
            .map_err(|e| storage_error("find hotel", e))?;
        Ok(row.map(Hotel::from))
    }

    async fn health_check(&self) -> Result<(), CoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(|e| storage_error("health check", e))
    }
}
