use async_trait::async_trait;

use lotwise_core::{ParcelId, ParcelRecord};

use crate::error::StoreError;

/// Trait for resolving parcels together with their zoning and flood facts.
///
/// Implementations must be `Send + Sync` and safe for concurrent access.
/// Spatial work (zoning containment, flood intersection) happens behind this
/// trait; callers only see resolved records.
#[async_trait]
pub trait ParcelStore: Send + Sync {
    /// Resolve a parcel by id. Returns `None` if no parcel matches.
    async fn fetch(&self, id: &ParcelId) -> Result<Option<ParcelRecord>, StoreError>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;

    /// Release backend resources (connection pools). Further calls may fail.
    async fn close(&self) {}
}
