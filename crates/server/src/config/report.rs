use std::time::Duration;

use serde::Deserialize;

/// Report assembly and HTTP caching configuration.
#[derive(Debug, Deserialize)]
pub struct ReportConfig {
    /// Upper bound on a single parcel lookup, in seconds.
    #[serde(default = "default_query_timeout")]
    pub query_timeout_seconds: u64,
    /// Shared-cache freshness lifetime (`s-maxage`) for report responses.
    #[serde(default = "default_cache_max_age")]
    pub cache_max_age_seconds: u64,
    /// Window during which a stale report may be served while revalidating.
    #[serde(default = "default_stale_while_revalidate")]
    pub stale_while_revalidate_seconds: u64,
}

impl ReportConfig {
    /// The query timeout as a [`Duration`].
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_seconds)
    }

    /// `Cache-Control` value attached to successful report responses.
    pub fn cache_control(&self) -> String {
        format!(
            "s-maxage={}, stale-while-revalidate={}",
            self.cache_max_age_seconds, self.stale_while_revalidate_seconds
        )
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            query_timeout_seconds: default_query_timeout(),
            cache_max_age_seconds: default_cache_max_age(),
            stale_while_revalidate_seconds: default_stale_while_revalidate(),
        }
    }
}

fn default_query_timeout() -> u64 {
    10
}

fn default_cache_max_age() -> u64 {
    60
}

fn default_stale_while_revalidate() -> u64 {
    300
}
