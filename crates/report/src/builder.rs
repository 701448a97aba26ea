use std::sync::Arc;
use std::time::Duration;

use lotwise_store::ParcelStore;

use crate::assembler::ReportAssembler;
use crate::error::ReportError;
use crate::metrics::ReportMetrics;

/// Default upper bound on a single parcel store lookup.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Fluent builder for constructing a [`ReportAssembler`].
///
/// A [`ParcelStore`] must be supplied. The query timeout defaults to
/// [`DEFAULT_QUERY_TIMEOUT`].
pub struct ReportAssemblerBuilder {
    store: Option<Arc<dyn ParcelStore>>,
    query_timeout: Duration,
}

impl ReportAssemblerBuilder {
    /// Create a new builder with all optional fields set to their defaults.
    pub fn new() -> Self {
        Self {
            store: None,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    /// Set the parcel store implementation.
    #[must_use]
    pub fn store(mut self, store: Arc<dyn ParcelStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Set the upper bound on a single parcel store lookup.
    #[must_use]
    pub fn query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    /// Consume the builder and produce a configured [`ReportAssembler`].
    ///
    /// Returns [`ReportError::Configuration`] if no store was set or the
    /// timeout is zero.
    pub fn build(self) -> Result<ReportAssembler, ReportError> {
        let store = self
            .store
            .ok_or_else(|| ReportError::Configuration("parcel store is required".into()))?;

        if self.query_timeout.is_zero() {
            return Err(ReportError::Configuration(
                "query timeout must be greater than zero".into(),
            ));
        }

        Ok(ReportAssembler::new(
            store,
            self.query_timeout,
            Arc::new(ReportMetrics::default()),
        ))
    }
}

impl Default for ReportAssemblerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
