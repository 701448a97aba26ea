use serde::{Deserialize, Serialize};

use crate::facts::ParcelFacts;
use crate::types::ParcelId;

/// A parcel row as resolved by the parcel store, including the facts that
/// come out of the spatial joins against the zoning and flood layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParcelRecord {
    /// Parcel identifier.
    pub id: ParcelId,
    /// Street address.
    pub address: String,
    /// Lot frontage in meters.
    #[serde(default)]
    pub frontage_m: Option<f64>,
    /// Lot depth in meters.
    #[serde(default)]
    pub depth_m: Option<f64>,
    /// Lot area in square meters (`frontage_m * depth_m` when both are known).
    #[serde(default)]
    pub lot_area_m2: Option<f64>,
    /// Code of the zoning area containing the parcel.
    #[serde(default)]
    pub zoning_code: Option<String>,
    /// Description of the zoning area containing the parcel.
    #[serde(default)]
    pub zoning_description: Option<String>,
    /// Whether any flood zone intersects the parcel.
    #[serde(default)]
    pub in_flood: bool,
}

impl ParcelRecord {
    /// Create a record with no dimensions, no zoning, and no flood exposure.
    pub fn new(id: impl Into<ParcelId>, address: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            address: address.into(),
            frontage_m: None,
            depth_m: None,
            lot_area_m2: None,
            zoning_code: None,
            zoning_description: None,
            in_flood: false,
        }
    }

    /// Set the lot dimensions and derive the lot area from them.
    #[must_use]
    pub fn with_dimensions(mut self, frontage_m: Option<f64>, depth_m: Option<f64>) -> Self {
        self.frontage_m = frontage_m;
        self.depth_m = depth_m;
        self.lot_area_m2 = lot_area(frontage_m, depth_m);
        self
    }

    /// Set the containing zoning area.
    #[must_use]
    pub fn with_zoning(mut self, code: impl Into<String>, description: Option<&str>) -> Self {
        self.zoning_code = Some(code.into());
        self.zoning_description = description.map(str::to_owned);
        self
    }

    /// Set flood zone membership.
    #[must_use]
    pub fn with_flood(mut self, in_flood: bool) -> Self {
        self.in_flood = in_flood;
        self
    }

    /// Project this record onto the facts the rule engine consumes.
    #[must_use]
    pub fn facts(&self) -> ParcelFacts {
        ParcelFacts {
            zoning_code: self.zoning_code.clone(),
            frontage_meters: self.frontage_m,
            in_flood_zone: self.in_flood,
        }
    }
}

/// Lot area in square meters, present only when both dimensions are known.
#[must_use]
pub fn lot_area(frontage_m: Option<f64>, depth_m: Option<f64>) -> Option<f64> {
    match (frontage_m, depth_m) {
        (Some(frontage), Some(depth)) => Some(frontage * depth),
        _ => None,
    }
}
