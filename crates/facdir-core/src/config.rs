use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

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
/// Decoupled from the process environment so tests can drive it with a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
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

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let database_url = require("DATABASE_URL")?;

    let env = parse_environment(&or_default("FACDIR_ENV", "development"));

    let bind_addr = parse("FACDIR_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("FACDIR_LOG_LEVEL", "info");
    let reference_path = PathBuf::from(or_default(
        "FACDIR_REFERENCE_PATH",
        "./config/reference.yaml",
    ));
    let seed_path = PathBuf::from(or_default("FACDIR_SEED_PATH", "./config/facilities.yaml"));

    let db_max_connections = parse_u32("FACDIR_DB_MAX_CONNECTIONS", "10")?;
    let db_min_connections = parse_u32("FACDIR_DB_MIN_CONNECTIONS", "1")?;
    let db_acquire_timeout_secs = parse_u64("FACDIR_DB_ACQUIRE_TIMEOUT_SECS", "10")?;

    let facility_cache_ttl_secs = parse_u64("FACDIR_FACILITY_CACHE_TTL_SECS", "300")?;
    let rate_limit_max_requests = parse_usize("FACDIR_RATE_LIMIT_MAX_REQUESTS", "120")?;
    let rate_limit_window_secs = parse_u64("FACDIR_RATE_LIMIT_WINDOW_SECS", "60")?;

    if rate_limit_window_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "FACDIR_RATE_LIMIT_WINDOW_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(AppConfig {
        database_url,
        env,
        bind_addr,
        log_level,
        reference_path,
        seed_path,
        db_max_connections,
        db_min_connections,
        db_acquire_timeout_secs,
        facility_cache_ttl_secs,
        rate_limit_max_requests,
        rate_limit_window_secs,
    })
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
