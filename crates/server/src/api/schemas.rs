use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use lotwise_report::MetricsSnapshot;

/// Health check response.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// `"ok"` when the parcel store answers, `"degraded"` otherwise.
    #[schema(example = "ok")]
    pub status: String,
    /// Current report metrics snapshot.
    pub metrics: MetricsResponse,
}

/// Report assembly counters.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MetricsResponse {
    /// Total report requests.
    #[schema(example = 142)]
    pub requested: u64,
    /// Reports successfully generated.
    #[schema(example = 130)]
    pub generated: u64,
    /// Requests for unknown parcels.
    #[schema(example = 9)]
    pub not_found: u64,
    /// Requests with a blank identifier.
    #[schema(example = 1)]
    pub invalid: u64,
    /// Requests that failed in the parcel store.
    #[schema(example = 2)]
    pub failed: u64,
    /// Generated reports that allowed an ADU.
    #[schema(example = 87)]
    pub adu_allowed: u64,
    /// Generated reports that denied an ADU.
    #[schema(example = 43)]
    pub adu_denied: u64,
}

impl From<MetricsSnapshot> for MetricsResponse {
    fn from(snap: MetricsSnapshot) -> Self {
        Self {
            requested: snap.requested,
            generated: snap.generated,
            not_found: snap.not_found,
            invalid: snap.invalid,
            failed: snap.failed,
            adu_allowed: snap.adu_allowed,
            adu_denied: snap.adu_denied,
        }
    }
}

/// Standard error response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    #[schema(example = "Parcel not found")]
    pub error: String,
}
