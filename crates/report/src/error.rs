use thiserror::Error;

use lotwise_core::ParcelId;

/// Errors that can occur while assembling a parcel report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The request did not carry a usable parcel identifier.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No parcel matches the identifier.
    #[error("parcel not found: {0}")]
    NotFound(ParcelId),

    /// The parcel store failed or timed out.
    #[error("store error: {0}")]
    Store(#[from] lotwise_store::StoreError),

    /// The assembler was misconfigured (e.g. missing required components).
    #[error("configuration error: {0}")]
    Configuration(String),
}
