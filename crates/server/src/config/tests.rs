use super::*;

#[test]
fn empty_config_uses_defaults() {
    let config = LotwiseConfig::from_toml("").unwrap();
    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.shutdown_timeout_seconds, 30);
    assert_eq!(config.store.backend, "memory");
    assert!(config.store.url.is_none());
    assert_eq!(config.store.pool_size, 5);
    assert_eq!(config.store.connect_timeout_seconds, 5);
    assert_eq!(config.store.schema, "public");
    assert!(!config.store.run_migrations);
    assert!(config.store.seed_file.is_none());
    assert_eq!(config.report.query_timeout_seconds, 10);
    assert_eq!(config.report.cache_max_age_seconds, 60);
    assert_eq!(config.report.stale_while_revalidate_seconds, 300);
}

#[test]
fn missing_file_uses_defaults() {
    let config = LotwiseConfig::load(Path::new("/nonexistent/lotwise.toml")).unwrap();
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.store.backend, "memory");
}

#[test]
fn full_config_overrides() {
    let toml = r#"
        [server]
        host = "0.0.0.0"
        port = 9000
        shutdown_timeout_seconds = 5

        [store]
        backend = "postgres"
        url = "postgres://gis@db/parcels"
        pool_size = 20
        connect_timeout_seconds = 2
        schema = "gis"
        run_migrations = true

        [report]
        query_timeout_seconds = 3
        cache_max_age_seconds = 120
        stale_while_revalidate_seconds = 600
    "#;

    let config = LotwiseConfig::from_toml(toml).unwrap();
    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.shutdown_timeout_seconds, 5);
    assert_eq!(config.store.backend, "postgres");
    assert_eq!(config.store.url.as_deref(), Some("postgres://gis@db/parcels"));
    assert_eq!(config.store.pool_size, 20);
    assert_eq!(config.store.connect_timeout_seconds, 2);
    assert_eq!(config.store.schema, "gis");
    assert!(config.store.run_migrations);
    assert_eq!(config.report.query_timeout(), std::time::Duration::from_secs(3));
    assert_eq!(
        config.report.cache_control(),
        "s-maxage=120, stale-while-revalidate=600"
    );
}

#[test]
fn partial_section_keeps_other_defaults() {
    let toml = r#"
        [store]
        seed_file = "data/parcels.json"
    "#;

    let config = LotwiseConfig::from_toml(toml).unwrap();
    assert_eq!(config.store.backend, "memory");
    assert_eq!(config.store.seed_file.as_deref(), Some("data/parcels.json"));
    assert_eq!(config.server.port, 8080);
}

#[test]
fn default_cache_control() {
    assert_eq!(
        ReportConfig::default().cache_control(),
        "s-maxage=60, stale-while-revalidate=300"
    );
}

#[test]
fn invalid_toml_is_config_error() {
    let err = LotwiseConfig::from_toml("[server]\nport = \"not a number\"").unwrap_err();
    assert!(matches!(err, ServerError::Config(_)));
}
