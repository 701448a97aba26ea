//! Conformance suite shared by every parcel store backend.
//!
//! Backends seed the parcels described by [`fixture_parcels`] (memory stores
//! insert them directly, spatial stores build matching geometries) and then
//! call [`run_store_conformance_tests`].

use lotwise_core::{ParcelId, ParcelRecord};

use crate::error::StoreError;
use crate::store::ParcelStore;

/// Buildable R2 parcel outside every flood zone.
pub const DRY_R2_PARCEL: &str = "conf-dry-r2";
/// R2 parcel intersecting a flood zone.
pub const FLOODED_PARCEL: &str = "conf-flooded";
/// Parcel outside every zoning area, with frontage but no depth.
pub const UNZONED_PARCEL: &str = "conf-unzoned";
/// Id that no backend should resolve.
pub const MISSING_PARCEL: &str = "conf-missing";

/// The records every backend must resolve after seeding.
pub fn fixture_parcels() -> Vec<ParcelRecord> {
    vec![
        ParcelRecord::new(DRY_R2_PARCEL, "10 Dry Lane")
            .with_dimensions(Some(10.0), Some(30.0))
            .with_zoning("R2", Some("Two-family residential")),
        ParcelRecord::new(FLOODED_PARCEL, "2 River Road")
            .with_dimensions(Some(12.0), Some(20.0))
            .with_zoning("R2", Some("Two-family residential"))
            .with_flood(true),
        ParcelRecord::new(UNZONED_PARCEL, "7 Edge Street").with_dimensions(Some(8.0), None),
    ]
}

/// Run the full parcel store conformance test suite.
///
/// # Errors
///
/// Returns an error if the backend fails an operation.
pub async fn run_store_conformance_tests(store: &dyn ParcelStore) -> Result<(), StoreError> {
    test_health_check(store).await?;
    test_fetch_missing(store).await?;
    test_fetch_dry_parcel(store).await?;
    test_fetch_flooded_parcel(store).await?;
    test_fetch_unzoned_parcel(store).await?;
    Ok(())
}

async fn fetch_fixture(store: &dyn ParcelStore, id: &str) -> Result<ParcelRecord, StoreError> {
    store
        .fetch(&ParcelId::new(id))
        .await?
        .ok_or_else(|| StoreError::Backend(format!("fixture parcel {id} did not resolve")))
}

async fn test_health_check(store: &dyn ParcelStore) -> Result<(), StoreError> {
    store.health_check().await
}

async fn test_fetch_missing(store: &dyn ParcelStore) -> Result<(), StoreError> {
    let record = store.fetch(&ParcelId::new(MISSING_PARCEL)).await?;
    assert!(record.is_none(), "fetch on unknown id should return None");
    Ok(())
}

async fn test_fetch_dry_parcel(store: &dyn ParcelStore) -> Result<(), StoreError> {
    let record = fetch_fixture(store, DRY_R2_PARCEL).await?;
    assert_eq!(record.address, "10 Dry Lane");
    assert_eq!(record.zoning_code.as_deref(), Some("R2"));
    assert_eq!(
        record.zoning_description.as_deref(),
        Some("Two-family residential")
    );
    assert_eq!(record.frontage_m, Some(10.0));
    assert_eq!(record.depth_m, Some(30.0));
    assert_eq!(record.lot_area_m2, Some(300.0));
    assert!(!record.in_flood);
    Ok(())
}

async fn test_fetch_flooded_parcel(store: &dyn ParcelStore) -> Result<(), StoreError> {
    let record = fetch_fixture(store, FLOODED_PARCEL).await?;
    assert!(record.in_flood, "flooded fixture should report in_flood");
    assert_eq!(record.lot_area_m2, Some(240.0));
    Ok(())
}

async fn test_fetch_unzoned_parcel(store: &dyn ParcelStore) -> Result<(), StoreError> {
    let record = fetch_fixture(store, UNZONED_PARCEL).await?;
    assert!(record.zoning_code.is_none());
    assert!(record.zoning_description.is_none());
    assert_eq!(record.frontage_m, Some(8.0));
    assert!(record.depth_m.is_none());
    assert!(
        record.lot_area_m2.is_none(),
        "area needs both frontage and depth"
    );
    assert!(!record.in_flood);
    Ok(())
}
