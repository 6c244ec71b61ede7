//! Hotel use cases: create and get-by-id.

use std::sync::Arc;

use crate::error::CoreError;
use crate::hotel::{CreateHotelRequest, HotelView};
use crate::mapper::HotelMapper;
use crate::store::HotelStore;
use crate::types::DbId;

/// Orchestrates the mapper and the store. Performs no input validation;
/// callers hand it requests that already passed
/// [`validate_input`](crate::validation::validate_input).
///
/// Cheap to clone: the store is shared behind an `Arc`.
#[derive(Clone)]
pub struct HotelService {
    store: Arc<dyn HotelStore>,
    mapper: HotelMapper,
}

impl HotelService {
    pub fn new(store: Arc<dyn HotelStore>, mapper: HotelMapper) -> Self {
        Self { store, mapper }
    }

    /// The store this service writes to.
    pub fn store(&self) -> &dyn HotelStore {
        self.store.as_ref()
    }

    pub async fn create_hotel(&self, request: CreateHotelRequest) -> Result<HotelView, CoreError> {
        let record = self.mapper.to_record(request);
        let saved = self.store.save(record).await?;
        tracing::info!(hotel_id = ?saved.id, name = %saved.name, "Hotel created");
        Ok(self.mapper.to_view(&saved))
    }

    /// Fails with [`CoreError::NotFound`] when no record has `id`.
    pub async fn get_hotel_by_id(&self, id: DbId) -> Result<HotelView, CoreError> {
        match self.store.find_by_id(id).await? {
            Some(hotel) => Ok(self.mapper.to_view(&hotel)),
            None => {
                tracing::debug!(hotel_id = id, "Hotel lookup missed");
                Err(CoreError::NotFound { entity: "Hotel", id })
            }
        }
    }
}
