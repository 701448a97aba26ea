pub mod health;
pub mod openapi;
pub mod report;
pub mod schemas;

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use lotwise_report::ReportAssembler;

use self::openapi::ApiDoc;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The report assembler, owning the parcel store handle.
    pub assembler: Arc<ReportAssembler>,
    /// `Cache-Control` value attached to successful report responses.
    pub cache_control: Arc<str>,
}

impl AppState {
    /// Create state with the given assembler and cache directive.
    pub fn new(assembler: Arc<ReportAssembler>, cache_control: impl Into<Arc<str>>) -> Self {
        Self {
            assembler,
            cache_control: cache_control.into(),
        }
    }
}

/// Build the Axum router with all API routes and middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/metrics", get(health::metrics))
        .route("/api/properties/{id}/report", get(report::get_report))
        .route(
            "/api-doc/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
