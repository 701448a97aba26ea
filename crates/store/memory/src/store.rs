use std::path::Path;

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use lotwise_core::{ParcelId, ParcelRecord};
use lotwise_store::error::StoreError;
use lotwise_store::store::ParcelStore;

/// In-memory [`ParcelStore`] backed by a [`DashMap`].
///
/// Records are stored already resolved: zoning and flood facts are whatever
/// the inserted [`ParcelRecord`] says. No spatial evaluation happens here.
#[derive(Debug, Default)]
pub struct MemoryParcelStore {
    data: DashMap<ParcelId, ParcelRecord>,
}

impl MemoryParcelStore {
    /// Create a new, empty in-memory parcel store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given records.
    pub fn with_records(records: impl IntoIterator<Item = ParcelRecord>) -> Self {
        let store = Self::new();
        for record in records {
            store.insert(record);
        }
        store
    }

    /// Build a store from a JSON array of parcel records.
    ///
    /// Records without an explicit `lot_area_m2` get one derived from their
    /// frontage and depth.
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let records: Vec<ParcelRecord> =
            serde_json::from_str(json).map_err(|e| StoreError::Serialization(e.to_string()))?;
        let records = records.into_iter().map(|mut r| {
            if r.lot_area_m2.is_none() {
                r.lot_area_m2 = lotwise_core::lot_area(r.frontage_m, r.depth_m);
            }
            r
        });
        Ok(Self::with_records(records))
    }

    /// Build a store from a JSON seed file (see [`from_json_str`](Self::from_json_str)).
    pub fn from_json_file(path: &Path) -> Result<Self, StoreError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            StoreError::Connection(format!("cannot read {}: {e}", path.display()))
        })?;
        let store = Self::from_json_str(&contents)?;
        debug!(path = %path.display(), parcels = store.len(), "seeded memory parcel store");
        Ok(store)
    }

    /// Insert or replace a record. Returns the previous record for that id.
    pub fn insert(&self, record: ParcelRecord) -> Option<ParcelRecord> {
        self.data.insert(record.id.clone(), record)
    }

    /// Remove a record. Returns it if it existed.
    pub fn remove(&self, id: &ParcelId) -> Option<ParcelRecord> {
        self.data.remove(id).map(|(_, record)| record)
    }

    /// Number of stored parcels.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the store holds no parcels.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[async_trait]
impl ParcelStore for MemoryParcelStore {
    async fn fetch(&self, id: &ParcelId) -> Result<Option<ParcelRecord>, StoreError> {
        Ok(self.data.get(id).map(|entry| entry.value().clone()))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
