use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use lotwise_report::ReportError;
use lotwise_store::StoreError;

/// Errors that can occur when running the Lotwise server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// A configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// An I/O error (e.g. binding the listener).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A report-level error surfaced through the API.
    #[error("report error: {0}")]
    Report(#[from] ReportError),
}

impl ServerError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::Report(ReportError::InvalidInput(_)) => {
                (StatusCode::BAD_REQUEST, "Missing id".to_owned())
            }
            Self::Report(ReportError::NotFound(_)) => {
                (StatusCode::NOT_FOUND, "Parcel not found".to_owned())
            }
            Self::Report(ReportError::Store(e @ StoreError::Timeout(_))) => {
                (StatusCode::GATEWAY_TIMEOUT, e.to_string())
            }
            Self::Report(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            Self::Config(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            Self::Io(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "request failed");
        }
        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use lotwise_core::ParcelId;

    use super::*;

    fn status_of(err: ServerError) -> (StatusCode, String) {
        err.status_and_message()
    }

    #[test]
    fn invalid_input_is_bad_request() {
        let (status, msg) = status_of(ReportError::InvalidInput("missing id".into()).into());
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(msg, "Missing id");
    }

    #[test]
    fn not_found_is_404() {
        let (status, msg) = status_of(ReportError::NotFound(ParcelId::new("P-1")).into());
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(msg, "Parcel not found");
    }

    #[test]
    fn store_timeout_is_gateway_timeout() {
        let err: ServerError =
            ReportError::Store(StoreError::Timeout(Duration::from_secs(10))).into();
        assert_eq!(status_of(err).0, StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn store_failure_is_internal() {
        let err: ServerError =
            ReportError::Store(StoreError::Connection("refused".into())).into();
        let (status, msg) = status_of(err);
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(msg.contains("refused"));
    }
}
