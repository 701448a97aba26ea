use serde::{Deserialize, Serialize};

/// Normalized facts about a parcel, as consumed by the rule engine.
///
/// All three fields are independent. Spatial derivation (e.g. whether the
/// parcel geometry touches a flood area) has already happened by the time a
/// `ParcelFacts` value exists.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ParcelFacts {
    /// Zoning classification code of the containing zoning area, if any.
    #[cfg_attr(feature = "openapi", schema(example = "R2"))]
    pub zoning_code: Option<String>,
    /// Linear frontage of the lot in meters, if known.
    #[cfg_attr(feature = "openapi", schema(example = 10.0))]
    pub frontage_meters: Option<f64>,
    /// Whether the parcel intersects a designated flood area.
    pub in_flood_zone: bool,
}

impl ParcelFacts {
    /// Create facts from their three components.
    #[must_use]
    pub fn new(zoning_code: Option<&str>, frontage_meters: Option<f64>, in_flood_zone: bool) -> Self {
        Self {
            zoning_code: zoning_code.map(str::to_owned),
            frontage_meters,
            in_flood_zone,
        }
    }
}
