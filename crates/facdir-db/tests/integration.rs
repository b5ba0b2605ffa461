//! Offline unit tests for facdir-db pool configuration and row types.
//! These tests do not require a live database connection.

use chrono::Utc;
use facdir_core::{AppConfig, Environment, Facility};
use facdir_db::{FacilityRow, PoolConfig};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

#[test]
fn pool_config_from_app_config_uses_core_values() {
    let app_config = AppConfig {
        database_url: "postgres://example".to_string(),
        env: Environment::Test,
        bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000),
        log_level: "info".to_string(),
        reference_path: PathBuf::from("./config/reference.yaml"),
        seed_path: PathBuf::from("./config/facilities.yaml"),
        db_max_connections: 42,
        db_min_connections: 7,
        db_acquire_timeout_secs: 9,
        facility_cache_ttl_secs: 300,
        rate_limit_max_requests: 120,
        rate_limit_window_secs: 60,
    };

    let pool_config = PoolConfig::from_app_config(&app_config);
    assert_eq!(pool_config.max_connections, 42);
    assert_eq!(pool_config.min_connections, 7);
    assert_eq!(pool_config.acquire_timeout_secs, 9);
}

#[test]
fn facility_row_converts_into_facility() {
    let updated_at = Utc::now();
    let row = FacilityRow {
        id: 7,
        slug: "hill-country-detox-austin-tx".to_string(),
        name: "Hill Country Detox".to_string(),
        address: None,
        city: "Austin".to_string(),
        county: Some("Travis".to_string()),
        state: "Texas".to_string(),
        state_abbr: "TX".to_string(),
        zip_code: Some("78703".to_string()),
        latitude: Some(30.2711),
        longitude: Some(-97.7587),
        facility_type: "Detox Center".to_string(),
        type_slug: Some("detox-center".to_string()),
        phone: None,
        website: None,
        description: None,
        rating: Some(4.6),
        review_count: Some(128),
        photo: None,
        photo_url: None,
        created_at: updated_at,
        updated_at,
    };

    let facility = Facility::from(row);
    assert_eq!(facility.slug, "hill-country-detox-austin-tx");
    assert_eq!(facility.county.as_deref(), Some("Travis"));
    assert_eq!(facility.coordinates(), Some((30.2711, -97.7587)));
    assert_eq!(facility.effective_type_slug(), "detox-center");
    assert_eq!(facility.updated_at, Some(updated_at));
}
