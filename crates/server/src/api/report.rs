use axum::Json;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::IntoResponse;

use lotwise_core::ParcelReport;

use crate::error::ServerError;

use super::AppState;
use super::schemas::ErrorResponse;

/// `GET /api/properties/{id}/report` -- buildability report for one parcel.
#[utoipa::path(
    get,
    path = "/api/properties/{id}/report",
    tag = "Reports",
    summary = "Parcel report",
    description = "Resolves the parcel, its zoning, and its flood exposure, and returns the ADU buildability verdict.",
    params(
        ("id" = String, Path, description = "Parcel identifier")
    ),
    responses(
        (status = 200, description = "Report generated", body = ParcelReport),
        (status = 400, description = "Blank parcel identifier", body = ErrorResponse),
        (status = 404, description = "No parcel with this identifier", body = ErrorResponse),
        (status = 500, description = "Parcel store failure", body = ErrorResponse),
        (status = 504, description = "Parcel lookup timed out", body = ErrorResponse)
    )
)]
pub async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServerError> {
    let report = state.assembler.assemble(&id).await?;
    Ok((
        [(header::CACHE_CONTROL, state.cache_control.to_string())],
        Json(report),
    ))
}
