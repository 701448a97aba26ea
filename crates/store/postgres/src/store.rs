use std::sync::Arc;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, info};

use lotwise_core::{ParcelId, ParcelRecord};
use lotwise_store::error::StoreError;
use lotwise_store::store::ParcelStore;

use crate::config::PostgresConfig;
use crate::migrations;

/// Row shape of the report query: id, address, frontage, depth, area,
/// zoning code, zoning description, flood flag.
type ParcelRow = (
    String,
    String,
    Option<f64>,
    Option<f64>,
    Option<f64>,
    Option<String>,
    Option<String>,
    bool,
);

/// PostGIS-backed implementation of [`ParcelStore`].
///
/// One query resolves the parcel row, the first zoning area whose geometry
/// contains the parcel, and whether any flood zone intersects it. The pool is
/// created explicitly, shared by handle, and released with
/// [`close`](ParcelStore::close).
pub struct PostgresParcelStore {
    pool: PgPool,
    config: Arc<PostgresConfig>,
    fetch_sql: String,
}

impl PostgresParcelStore {
    /// Connect to `PostgreSQL` and create the connection pool.
    ///
    /// Runs migrations when [`PostgresConfig::run_migrations`] is set.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if pool creation fails, or
    /// [`StoreError::Backend`] if migrations fail.
    pub async fn new(config: PostgresConfig) -> Result<Self, StoreError> {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.pool_size)
            .acquire_timeout(config.connect_timeout)
            .connect(&config.url)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;

        info!(pool_size = config.pool_size, schema = %config.schema, "postgres parcel store connected");
        Self::from_pool(pool, config).await
    }

    /// Create a `PostgresParcelStore` from an existing pool and config.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] if migrations are enabled and fail.
    pub async fn from_pool(pool: PgPool, config: PostgresConfig) -> Result<Self, StoreError> {
        if config.run_migrations {
            migrations::run_migrations(&pool, &config)
                .await
                .map_err(|e| StoreError::Backend(e.to_string()))?;
            debug!("parcel store migrations applied");
        }

        let fetch_sql = fetch_query(&config);
        Ok(Self {
            pool,
            config: Arc::new(config),
            fetch_sql,
        })
    }

    /// The underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// The configuration this store was built with.
    pub fn config(&self) -> &PostgresConfig {
        &self.config
    }
}

/// Build the report query for the configured tables.
///
/// Lot area is only derived when both dimensions are present. The flood flag
/// comes from an `EXISTS` so it is never null.
fn fetch_query(config: &PostgresConfig) -> String {
    let parcels = config.parcels_table();
    let zoning = config.zoning_table();
    let flood = config.flood_table();

    format!(
        "WITH p AS (
            SELECT id, address, lot_frontage_m, lot_depth_m, geom,
                   CASE WHEN lot_frontage_m IS NOT NULL AND lot_depth_m IS NOT NULL
                        THEN lot_frontage_m * lot_depth_m
                        ELSE NULL END AS lot_area_m2
            FROM {parcels} WHERE id = $1
        ),
        z AS (
            SELECT z.code AS zoning_code, z.description AS zoning_description
            FROM {zoning} z, p WHERE ST_Contains(z.geom, p.geom) LIMIT 1
        ),
        f AS (
            SELECT EXISTS (
                SELECT 1 FROM {flood} fz, p WHERE ST_Intersects(fz.geom, p.geom)
            ) AS in_flood
        )
        SELECT p.id::text, p.address::text,
               p.lot_frontage_m::float8, p.lot_depth_m::float8, p.lot_area_m2::float8,
               z.zoning_code::text, z.zoning_description::text,
               COALESCE(f.in_flood, false)
        FROM p LEFT JOIN z ON true LEFT JOIN f ON true"
    )
}

fn into_record(row: ParcelRow) -> ParcelRecord {
    let (id, address, frontage_m, depth_m, lot_area_m2, zoning_code, zoning_description, in_flood) =
        row;
    ParcelRecord {
        id: ParcelId::from(id),
        address,
        frontage_m,
        depth_m,
        lot_area_m2,
        zoning_code,
        zoning_description,
        in_flood,
    }
}

#[async_trait]
impl ParcelStore for PostgresParcelStore {
    async fn fetch(&self, id: &ParcelId) -> Result<Option<ParcelRecord>, StoreError> {
        let row: Option<ParcelRow> = sqlx::query_as(&self.fetch_sql)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        Ok(row.map(into_record))
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
        info!("postgres parcel store closed");
    }
}


#[cfg(all(test, feature = "integration"))]
mod integration_tests {
    use super::*;
    use lotwise_store::testing::{
        DRY_R2_PARCEL, FLOODED_PARCEL, UNZONED_PARCEL, run_store_conformance_tests,
    };

    fn test_config() -> PostgresConfig {
        PostgresConfig {
            url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost:5432/lotwise_test".to_string()),
            table_prefix: format!("test_{}_", uuid::Uuid::new_v4().simple()),
            run_migrations: true,
            ..PostgresConfig::default()
        }
    }

    /// Lay out geometries matching `lotwise_store::testing::fixture_parcels`:
    /// one R2 area spanning x 0..300, a flood zone on x 200..300, and an
    /// unzoned parcel far outside both.
    async fn seed(store: &PostgresParcelStore) -> Result<(), sqlx::Error> {
        let cfg = store.config();
        let parcels = cfg.parcels_table();
        let zoning = cfg.zoning_table();
        let flood = cfg.flood_table();
        let pool = store.pool();

        sqlx::query(&format!(
            "INSERT INTO {zoning} (code, description, geom) \
             VALUES ('R2', 'Two-family residential', ST_MakeEnvelope(0, 0, 300, 100))"
        ))
        .execute(pool)
        .await?;
        sqlx::query(&format!(
            "INSERT INTO {flood} (geom) VALUES (ST_MakeEnvelope(200, 0, 300, 100))"
        ))
        .execute(pool)
        .await?;

        let insert = format!(
            "INSERT INTO {parcels} (id, address, lot_frontage_m, lot_depth_m, geom) \
             VALUES ($1, $2, $3, $4, ST_MakeEnvelope($5, $6, $7, $8))"
        );
        let rows: [(&str, &str, Option<f64>, Option<f64>, [f64; 4]); 3] = [
            (DRY_R2_PARCEL, "10 Dry Lane", Some(10.0), Some(30.0), [10.0, 10.0, 20.0, 20.0]),
            (FLOODED_PARCEL, "2 River Road", Some(12.0), Some(20.0), [210.0, 10.0, 220.0, 20.0]),
            (UNZONED_PARCEL, "7 Edge Street", Some(8.0), None, [500.0, 500.0, 510.0, 510.0]),
        ];
        for (id, address, frontage, depth, [x0, y0, x1, y1]) in rows {
            sqlx::query(&insert)
                .bind(id)
                .bind(address)
                .bind(frontage)
                .bind(depth)
                .bind(x0)
                .bind(y0)
                .bind(x1)
                .bind(y1)
                .execute(pool)
                .await?;
        }
        Ok(())
    }

    #[tokio::test]
    async fn store_conformance() {
        let store = PostgresParcelStore::new(test_config())
            .await
            .expect("pool creation should succeed");
        seed(&store).await.expect("seeding should succeed");
        run_store_conformance_tests(&store)
            .await
            .expect("conformance tests should pass");
        store.close().await;
    }
}
