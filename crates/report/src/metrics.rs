use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counters tracking report requests and their outcomes.
///
/// All counters use relaxed ordering. For a consistent point-in-time view,
/// call [`snapshot`](Self::snapshot).
#[derive(Debug, Default)]
pub struct ReportMetrics {
    /// Total number of report requests.
    pub requested: AtomicU64,
    /// Reports successfully generated.
    pub generated: AtomicU64,
    /// Requests for parcels that do not exist.
    pub not_found: AtomicU64,
    /// Requests rejected for a blank identifier.
    pub invalid: AtomicU64,
    /// Requests that failed in the parcel store.
    pub failed: AtomicU64,
    /// Generated reports whose verdict allowed an ADU.
    pub adu_allowed: AtomicU64,
    /// Generated reports whose verdict denied an ADU.
    pub adu_denied: AtomicU64,
}

impl ReportMetrics {
    /// Increment the requested counter.
    pub fn increment_requested(&self) {
        self.requested.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the generated counter.
    pub fn increment_generated(&self) {
        self.generated.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the not-found counter.
    pub fn increment_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the invalid-input counter.
    pub fn increment_invalid(&self) {
        self.invalid.fetch_add(1, Ordering::Relaxed);
    }

    /// Increment the failed counter.
    pub fn increment_failed(&self) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record the decision of a generated report.
    pub fn record_decision(&self, allow_adu: bool) {
        if allow_adu {
            self.adu_allowed.fetch_add(1, Ordering::Relaxed);
        } else {
            self.adu_denied.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Take a point-in-time snapshot of all counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            requested: self.requested.load(Ordering::Relaxed),
            generated: self.generated.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
            invalid: self.invalid.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            adu_allowed: self.adu_allowed.load(Ordering::Relaxed),
            adu_denied: self.adu_denied.load(Ordering::Relaxed),
        }
    }
}

/// A plain data snapshot of [`ReportMetrics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsSnapshot {
    /// Total number of report requests.
    pub requested: u64,
    /// Reports successfully generated.
    pub generated: u64,
    /// Requests for parcels that do not exist.
    pub not_found: u64,
    /// Requests rejected for a blank identifier.
    pub invalid: u64,
    /// Requests that failed in the parcel store.
    pub failed: u64,
    /// Generated reports whose verdict allowed an ADU.
    pub adu_allowed: u64,
    /// Generated reports whose verdict denied an ADU.
    pub adu_denied: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let snap = ReportMetrics::default().snapshot();
        assert_eq!(
            snap,
            MetricsSnapshot {
                requested: 0,
                generated: 0,
                not_found: 0,
                invalid: 0,
                failed: 0,
                adu_allowed: 0,
                adu_denied: 0,
            }
        );
    }

    #[test]
    fn increment_and_snapshot() {
        let m = ReportMetrics::default();
        m.increment_requested();
        m.increment_requested();
        m.increment_generated();
        m.increment_not_found();
        m.increment_invalid();
        m.increment_failed();
        m.record_decision(true);
        m.record_decision(false);
        m.record_decision(false);

        let snap = m.snapshot();
        assert_eq!(snap.requested, 2);
        assert_eq!(snap.generated, 1);
        assert_eq!(snap.not_found, 1);
        assert_eq!(snap.invalid, 1);
        assert_eq!(snap.failed, 1);
        assert_eq!(snap.adu_allowed, 1);
        assert_eq!(snap.adu_denied, 2);
    }
}
