use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;

use crate::app_config::{AppConfig, Environment};

/// Characters left as-is inside the userinfo part of a connection URL.
/// Everything outside the RFC 3986 unreserved set is escaped.
const USERINFO: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Parsing and validation live here so tests can drive it with a plain
/// `HashMap` lookup instead of mutating the process environment.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let database_url = resolve_database_url(&lookup)?;

    let env = parse_environment(&or_default("FOLIO_ENV", "development"));

    let bind_raw = or_default("FOLIO_BIND_ADDR", "0.0.0.0:3000");
    let bind_addr = bind_raw
        .parse::<SocketAddr>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "FOLIO_BIND_ADDR".to_string(),
            reason: e.to_string(),
        })?;

    let log_level = or_default("FOLIO_LOG_LEVEL", "info");
    let web_dist_path = PathBuf::from(or_default("FOLIO_WEB_DIST", "./web/dist"));

    let db_max_connections = parse_u32("FOLIO_DB_MAX_CONNECTIONS", "10")?;
    let db_min_connections = parse_u32("FOLIO_DB_MIN_CONNECTIONS", "1")?;
    let db_acquire_timeout_secs = parse_u64("FOLIO_DB_ACQUIRE_TIMEOUT_SECS", "10")?;

    Ok(AppConfig {
        database_url,
        env,
        bind_addr,
        log_level,
        web_dist_path,
        db_max_connections,
        db_min_connections,
        db_acquire_timeout_secs,
    })
}

/// Resolve the Postgres connection string.
///
/// `DATABASE_URL` wins when set. Otherwise the URL is assembled from the
/// discrete `DB_HOST` / `DB_PORT` / `DB_USER` / `DB_PASSWORD` / `DB_NAME`
/// variables; host, user, and name are required in that mode. User and
/// password are percent-encoded so any byte sequence survives URL parsing.
fn resolve_database_url<F>(lookup: &F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    if let Ok(url) = lookup("DATABASE_URL") {
        return Ok(url);
    }

    let (Ok(host), Ok(user), Ok(name)) = (lookup("DB_HOST"), lookup("DB_USER"), lookup("DB_NAME"))
    else {
        return Err(ConfigError::MissingEnvVar("DATABASE_URL".to_string()));
    };

    let port_raw = lookup("DB_PORT").unwrap_or_else(|_| "5432".to_string());
    let port = port_raw
        .parse::<u16>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            var: "DB_PORT".to_string(),
            reason: e.to_string(),
        })?;

    let user = utf8_percent_encode(&user, USERINFO);
    let url = match lookup("DB_PASSWORD") {
        Ok(password) if !password.is_empty() => {
            let password = utf8_percent_encode(&password, USERINFO);
            format!("postgres://{user}:{password}@{host}:{port}/{name}")
        }
        _ => format!("postgres://{user}@{host}:{port}/{name}"),
    };
    Ok(url)
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
