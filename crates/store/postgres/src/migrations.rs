use sqlx::PgPool;

use crate::config::PostgresConfig;

/// Create the PostGIS extension and the parcel, zoning, and flood tables if
/// they do not exist.
///
/// Deployments that manage the GIS schema elsewhere leave
/// [`PostgresConfig::run_migrations`] off and never call this.
///
/// # Errors
///
/// Returns a [`sqlx::Error`] if any DDL statement fails.
pub async fn run_migrations(pool: &PgPool, config: &PostgresConfig) -> Result<(), sqlx::Error> {
    let parcels = config.parcels_table();
    let zoning = config.zoning_table();
    let flood = config.flood_table();
    let prefix = &config.table_prefix;

    let statements = [
        "CREATE EXTENSION IF NOT EXISTS postgis".to_owned(),
        format!(
            "CREATE TABLE IF NOT EXISTS {parcels} (
                id TEXT PRIMARY KEY,
                address TEXT NOT NULL,
                lot_frontage_m DOUBLE PRECISION,
                lot_depth_m DOUBLE PRECISION,
                geom geometry NOT NULL
            )"
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {zoning} (
                id BIGSERIAL PRIMARY KEY,
                code TEXT NOT NULL,
                description TEXT,
                geom geometry NOT NULL
            )"
        ),
        format!(
            "CREATE TABLE IF NOT EXISTS {flood} (
                id BIGSERIAL PRIMARY KEY,
                geom geometry NOT NULL
            )"
        ),
        format!("CREATE INDEX IF NOT EXISTS {prefix}parcels_geom_idx ON {parcels} USING GIST (geom)"),
        format!("CREATE INDEX IF NOT EXISTS {prefix}zoning_areas_geom_idx ON {zoning} USING GIST (geom)"),
        format!("CREATE INDEX IF NOT EXISTS {prefix}flood_zones_geom_idx ON {flood} USING GIST (geom)"),
    ];

    for statement in &statements {
        sqlx::query(statement).execute(pool).await?;
    }

    Ok(())
}
