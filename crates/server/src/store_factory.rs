use std::path::Path;
use std::sync::Arc;

use lotwise_store::ParcelStore;
use lotwise_store_memory::MemoryParcelStore;
#[cfg(feature = "postgres")]
use lotwise_store_postgres::{PostgresConfig, PostgresParcelStore};

use crate::config::StoreConfig;
use crate::error::ServerError;

/// Create a parcel store from the given configuration.
///
/// The returned handle is the only connection to the backend; callers pass it
/// to the report assembler and close it on shutdown.
#[allow(clippy::unused_async)]
pub async fn create_parcel_store(config: &StoreConfig) -> Result<Arc<dyn ParcelStore>, ServerError> {
    let store: Arc<dyn ParcelStore> = match config.backend.as_str() {
        "memory" => {
            let store = match &config.seed_file {
                Some(path) => MemoryParcelStore::from_json_file(Path::new(path))
                    .map_err(|e| ServerError::Config(format!("memory seed: {e}")))?,
                None => MemoryParcelStore::new(),
            };
            tracing::info!(parcels = store.len(), "using memory parcel store");
            Arc::new(store)
        }
        #[cfg(feature = "postgres")]
        "postgres" => {
            let url = config.url.clone().ok_or_else(|| {
                ServerError::Config("postgres backend requires [store] url".into())
            })?;

            let pg_config = PostgresConfig {
                url,
                pool_size: config.pool_size,
                connect_timeout: std::time::Duration::from_secs(config.connect_timeout_seconds),
                schema: config.schema.clone(),
                run_migrations: config.run_migrations,
                ..PostgresConfig::default()
            };

            let store = PostgresParcelStore::new(pg_config)
                .await
                .map_err(|e| ServerError::Config(format!("postgres store: {e}")))?;

            Arc::new(store)
        }
        other => {
            return Err(ServerError::Config(format!(
                "unsupported store backend: {other}"
            )));
        }
    };

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn memory_backend_without_seed() {
        let store = create_parcel_store(&StoreConfig::default()).await.unwrap();
        assert!(store.health_check().await.is_ok());
    }

    #[tokio::test]
    async fn unknown_backend_is_rejected() {
        let config = StoreConfig {
            backend: "sqlite".into(),
            ..StoreConfig::default()
        };
        let err = create_parcel_store(&config).await.err().unwrap();
        assert!(err.to_string().contains("unsupported store backend: sqlite"));
    }

    #[tokio::test]
    async fn bundled_seed_file_loads() {
        let seed = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/parcels.json");
        let config = StoreConfig {
            seed_file: Some(seed.to_string_lossy().into_owned()),
            ..StoreConfig::default()
        };
        let store = create_parcel_store(&config).await.unwrap();
        let record = store
            .fetch(&lotwise_core::ParcelId::new("P-200"))
            .await
            .unwrap()
            .unwrap();
        assert!(record.in_flood);
        assert_eq!(record.lot_area_m2, Some(240.0));
    }

    #[tokio::test]
    async fn missing_seed_file_is_config_error() {
        let config = StoreConfig {
            seed_file: Some("/nonexistent/parcels.json".into()),
            ..StoreConfig::default()
        };
        let err = create_parcel_store(&config).await.err().unwrap();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[cfg(not(feature = "postgres"))]
    #[tokio::test]
    async fn postgres_requires_feature() {
        let config = StoreConfig {
            backend: "postgres".into(),
            ..StoreConfig::default()
        };
        assert!(create_parcel_store(&config).await.is_err());
    }
}
