mod report;
mod server;
mod store;

#[cfg(test)]
mod tests;

pub use report::*;
pub use server::*;
pub use store::*;

use std::path::Path;

use serde::Deserialize;

use crate::error::ServerError;

/// Top-level configuration for the Lotwise server, loaded from a TOML file.
#[derive(Debug, Default, Deserialize)]
pub struct LotwiseConfig {
    /// HTTP server bind configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Parcel store backend configuration.
    #[serde(default)]
    pub store: StoreConfig,
    /// Report assembly and caching configuration.
    #[serde(default)]
    pub report: ReportConfig,
}

impl LotwiseConfig {
    /// Load configuration from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self, ServerError> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self, ServerError> {
        toml::from_str(contents).map_err(|e| ServerError::Config(e.to_string()))
    }
}
