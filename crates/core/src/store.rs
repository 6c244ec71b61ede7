//! Persistence port for hotel records and its in-memory implementation.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::CoreError;
use crate::hotel::Hotel;
use crate::types::DbId;

/// Durable storage for [`Hotel`] records; owns identifier assignment.
#[async_trait]
pub trait HotelStore: Send + Sync {
    /// Short name of the backing engine, reported by the health endpoint.
    fn backend(&self) -> &'static str;

    /// Insert a record without an id (assigning the next one) or overwrite the
    /// stored record with the same id. Returns the stored record.
    ///
    /// Overwriting an id that is not stored fails with [`CoreError::NotFound`].
    async fn save(&self, hotel: Hotel) -> Result<Hotel, CoreError>;

    /// Look up a record. Absence is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: DbId) -> Result<Option<Hotel>, CoreError>;

    /// Check that the backing engine is reachable.
    async fn health_check(&self) -> Result<(), CoreError> {
        Ok(())
    }
}

#[derive(Debug)]
struct Inner {
    last_id: DbId,
    records: BTreeMap<DbId, Hotel>,
}

/// Process-local store. Identifiers start at 1.
///
/// A single mutex guards both the id counter and the map, so concurrent saves
/// never share an id and never observe a half-written record.
#[derive(Debug)]
pub struct InMemoryHotelStore {
    inner: Mutex<Inner>,
}

impl InMemoryHotelStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                last_id: 0,
                records: BTreeMap::new(),
            }),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>, CoreError> {
        self.inner
            .lock()
            .map_err(|_| CoreError::Storage("in-memory store lock poisoned".into()))
    }
}

impl Default for InMemoryHotelStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HotelStore for InMemoryHotelStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn save(&self, mut hotel: Hotel) -> Result<Hotel, CoreError> {
        let mut inner = self.lock()?;

        match hotel.id {
            Some(id) => {
                let slot = inner.records.get_mut(&id).ok_or(CoreError::NotFound {
                    entity: "Hotel",
                    id,
                })?;
                *slot = hotel.clone();
                tracing::debug!(hotel_id = id, "Overwrote hotel record");
            }
            None => {
                inner.last_id += 1;
                let id = inner.last_id;
                hotel.id = Some(id);
                inner.records.insert(id, hotel.clone());
                tracing::debug!(hotel_id = id, "Inserted hotel record");
            }
        }

        Ok(hotel)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Hotel>, CoreError> {
        Ok(self.lock()?.records.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use assert_matches::assert_matches;

    use super::*;

    fn unsaved(name: &str) -> Hotel {
        Hotel {
            id: None,
            name: name.to_string(),
            address: "1 Main Street".to_string(),
            city: "Springfield".to_string(),
            country: "USA".to_string(),
            stars: 3,
            description: None,
        }
    }

    #[tokio::test]
    async fn save_assigns_sequential_ids_from_one() {
        let store = InMemoryHotelStore::new();

        let first = store.save(unsaved("First")).await.unwrap();
        let second = store.save(unsaved("Second")).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
    }

    #[tokio::test]
    async fn find_by_id_returns_saved_record() {
        let store = InMemoryHotelStore::new();
        let saved = store.save(unsaved("Findable")).await.unwrap();

        let found = store.find_by_id(saved.id.unwrap()).await.unwrap();
        assert_eq!(found, Some(saved));
    }

    #[tokio::test]
    async fn find_by_id_absent_is_none() {
        let store = InMemoryHotelStore::new();
        assert_eq!(store.find_by_id(99).await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_with_id_overwrites_in_place() {
        let store = InMemoryHotelStore::new();
        let mut saved = store.save(unsaved("Before")).await.unwrap();
        saved.name = "After".to_string();
        saved.stars = 4;

        let updated = store.save(saved.clone()).await.unwrap();
        assert_eq!(updated, saved);

        let found = store.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(found.name, "After");
        assert_eq!(found.stars, 4);

        let next = store.save(unsaved("Next")).await.unwrap();
        assert_eq!(next.id, Some(2));
    }

    #[tokio::test]
    async fn save_with_unknown_id_is_not_found() {
        let store = InMemoryHotelStore::new();
        let mut hotel = unsaved("Ghost");
        hotel.id = Some(7);

        assert_matches!(
            store.save(hotel).await,
            Err(CoreError::NotFound { entity: "Hotel", id: 7 })
        );
        assert_eq!(store.find_by_id(7).await.unwrap(), None);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_saves_never_share_an_id() {
        let store = Arc::new(InMemoryHotelStore::new());

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.save(unsaved(&format!("Hotel {i}"))).await })
            })
            .collect();

        let mut ids = HashSet::new();
        for handle in handles {
            let saved = handle.await.unwrap().unwrap();
            assert!(ids.insert(saved.id.unwrap()), "duplicate id assigned");
        }

        assert_eq!(ids.len(), 64);
        assert_eq!(ids.iter().copied().max(), Some(64));
    }
}
