#![allow(clippy::needless_for_each)]

use lotwise_core::{
    BuildabilityChecks, BuildabilityVerdict, LotMetrics, ParcelId, ParcelReport, RiskFlag,
    ZoningInfo,
};

use super::schemas::{ErrorResponse, HealthResponse, MetricsResponse};

#[derive(utoipa::OpenApi)]
#[openapi(
    info(
        title = "Lotwise API",
        version = "0.1.0",
        description = "HTTP API for parcel ADU buildability reports.",
        license(name = "Apache-2.0")
    ),
    tags(
        (name = "Health", description = "Service health and metrics"),
        (name = "Reports", description = "Parcel buildability reports")
    ),
    paths(
        super::health::health,
        super::health::metrics,
        super::report::get_report,
    ),
    components(schemas(
        ParcelReport, ParcelId, ZoningInfo, LotMetrics, RiskFlag,
        BuildabilityVerdict, BuildabilityChecks,
        HealthResponse, MetricsResponse, ErrorResponse,
    ))
)]
pub struct ApiDoc;
