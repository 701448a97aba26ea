use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::ParcelRecord;
use crate::types::ParcelId;
use crate::verdict::BuildabilityVerdict;

/// Zoning section of a parcel report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ZoningInfo {
    /// Zoning classification code, `null` when no zoning area contains the parcel.
    #[cfg_attr(feature = "openapi", schema(example = "R2"))]
    pub code: Option<String>,
    /// Zoning area description.
    #[cfg_attr(feature = "openapi", schema(example = "Two-family residential"))]
    pub description: Option<String>,
}

/// Lot dimensions section of a parcel report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct LotMetrics {
    /// Lot frontage in meters.
    #[cfg_attr(feature = "openapi", schema(example = 10.0))]
    pub frontage_m: Option<f64>,
    /// Lot depth in meters.
    #[cfg_attr(feature = "openapi", schema(example = 30.0))]
    pub depth_m: Option<f64>,
    /// Lot area in square meters.
    #[serde(rename = "lotArea_m2")]
    #[cfg_attr(feature = "openapi", schema(example = 300.0))]
    pub lot_area_m2: Option<f64>,
}

/// A risk tag attached to a parcel report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum RiskFlag {
    /// The parcel intersects a flood zone.
    Flood,
}

/// The document returned for a parcel: identity, zoning, lot metrics, risk
/// flags, and the buildability verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ParcelReport {
    /// Parcel identifier.
    pub id: ParcelId,
    /// Street address.
    #[cfg_attr(feature = "openapi", schema(example = "12 Harbor Rd"))]
    pub address: String,
    /// Zoning of the containing zoning area.
    pub zoning: ZoningInfo,
    /// Lot dimensions.
    pub metrics: LotMetrics,
    /// Risk tags; `["flood"]` for flood-exposed parcels, otherwise empty.
    pub risk_flags: Vec<RiskFlag>,
    /// Rule engine verdict, embedded unmodified.
    pub buildability: BuildabilityVerdict,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
}

impl ParcelReport {
    /// Assemble a report from a store record and its verdict.
    #[must_use]
    pub fn new(
        record: ParcelRecord,
        buildability: BuildabilityVerdict,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let risk_flags = if record.in_flood {
            vec![RiskFlag::Flood]
        } else {
            Vec::new()
        };

        Self {
            id: record.id,
            address: record.address,
            zoning: ZoningInfo {
                code: record.zoning_code,
                description: record.zoning_description,
            },
            metrics: LotMetrics {
                frontage_m: record.frontage_m,
                depth_m: record.depth_m,
                lot_area_m2: record.lot_area_m2,
            },
            risk_flags,
            buildability,
            generated_at,
        }
    }
}
