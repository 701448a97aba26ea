use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, instrument, warn};

use lotwise_core::{ParcelId, ParcelRecord, ParcelReport};
use lotwise_store::{ParcelStore, StoreError};

use crate::error::ReportError;
use crate::metrics::ReportMetrics;

/// Resolves parcel identifiers into full reports.
///
/// The assembler owns no mutable state besides its counters, so a single
/// instance is shared across request handlers behind an `Arc`.
pub struct ReportAssembler {
    store: Arc<dyn ParcelStore>,
    query_timeout: Duration,
    metrics: Arc<ReportMetrics>,
}

impl std::fmt::Debug for ReportAssembler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportAssembler")
            .field("query_timeout", &self.query_timeout)
            .field("metrics", &self.metrics)
            .finish_non_exhaustive()
    }
}

impl ReportAssembler {
    pub(crate) fn new(
        store: Arc<dyn ParcelStore>,
        query_timeout: Duration,
        metrics: Arc<ReportMetrics>,
    ) -> Self {
        Self {
            store,
            query_timeout,
            metrics,
        }
    }

    /// Build the report for a parcel.
    ///
    /// Blank identifiers are rejected and unknown parcels reported as
    /// [`ReportError::NotFound`] before the rule engine runs. The store
    /// lookup is bounded by the configured query timeout.
    #[instrument(name = "report.assemble", skip(self))]
    pub async fn assemble(&self, id: &str) -> Result<ParcelReport, ReportError> {
        self.metrics.increment_requested();

        let id = id.trim();
        if id.is_empty() {
            self.metrics.increment_invalid();
            return Err(ReportError::InvalidInput("missing id".into()));
        }
        let id = ParcelId::new(id);

        let record = match self.fetch(&id).await {
            Ok(Some(record)) => record,
            Ok(None) => {
                self.metrics.increment_not_found();
                debug!("parcel not found");
                return Err(ReportError::NotFound(id));
            }
            Err(e) => {
                self.metrics.increment_failed();
                warn!(error = %e, "parcel lookup failed");
                return Err(e.into());
            }
        };

        let verdict = lotwise_rules::evaluate(&record.facts());
        self.metrics.increment_generated();
        self.metrics.record_decision(verdict.allow_adu);
        info!(
            allow_adu = verdict.allow_adu,
            zoning_allows = verdict.checks.zoning_allows,
            frontage_ok = verdict.checks.frontage_ok,
            not_flood = verdict.checks.not_flood,
            "report generated"
        );

        Ok(ParcelReport::new(record, verdict, Utc::now()))
    }

    async fn fetch(&self, id: &ParcelId) -> Result<Option<ParcelRecord>, StoreError> {
        tokio::time::timeout(self.query_timeout, self.store.fetch(id))
            .await
            .map_err(|_| StoreError::Timeout(self.query_timeout))?
    }

    /// Check that the parcel store is reachable.
    pub async fn health_check(&self) -> Result<(), ReportError> {
        tokio::time::timeout(self.query_timeout, self.store.health_check())
            .await
            .map_err(|_| StoreError::Timeout(self.query_timeout))??;
        Ok(())
    }

    /// Release the parcel store's resources.
    pub async fn shutdown(&self) {
        self.store.close().await;
    }

    /// Report counters.
    pub fn metrics(&self) -> &ReportMetrics {
        &self.metrics
    }

    /// Upper bound on a single store lookup.
    pub fn query_timeout(&self) -> Duration {
        self.query_timeout
    }
}
