//! Offline unit tests for folio-db pool configuration.
//! These tests do not require a live database connection.

use folio_core::{AppConfig, Environment};
use folio_db::{connect_pool_from_config, DbError, PoolConfig};
use sqlx::migrate::MigrateError;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

#[test]
fn pool_config_from_app_config_uses_core_values() {
    let app_config = AppConfig {
        database_url: "postgres://example".to_string(),
        env: Environment::Test,
        bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000),
        log_level: "info".to_string(),
        web_dist_path: PathBuf::from("./web/dist"),
        db_max_connections: 42,
        db_min_connections: 7,
        db_acquire_timeout_secs: 9,
    };

    let pool_config = PoolConfig::from_app_config(&app_config);
    assert_eq!(pool_config.max_connections, 42);
    assert_eq!(pool_config.min_connections, 7);
    assert_eq!(pool_config.acquire_timeout_secs, 9);
}

fn app_config(database_url: &str) -> AppConfig {
    AppConfig {
        database_url: database_url.to_string(),
        env: Environment::Test,
        bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000),
        log_level: "info".to_string(),
        web_dist_path: PathBuf::from("./web/dist"),
        db_max_connections: 1,
        db_min_connections: 1,
        db_acquire_timeout_secs: 1,
    }
}

#[test]
fn migrate_errors_convert_into_db_error() {
    let err = DbError::from(MigrateError::VersionMissing(20_260_101_000_000));
    assert!(matches!(err, DbError::Migration(_)), "got: {err:?}");
    assert!(err.to_string().contains("20260101000000"), "got: {err}");
}

#[tokio::test]
async fn connect_pool_from_config_reports_unreachable_database() {
    let config = app_config("postgres://folio@127.0.0.1:1/portfolio");
    let result = connect_pool_from_config(&config).await;
    assert!(matches!(result, Err(DbError::Sqlx(_))), "got: {result:?}");
}
