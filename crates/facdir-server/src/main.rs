mod api;
mod cache;
mod middleware;

use std::sync::Arc;
use std::time::Duration;

use facdir_core::{ConfigError, ReferenceData};
use tracing_subscriber::EnvFilter;

use crate::{
    api::{build_app, AppState},
    cache::FacilityCache,
    middleware::RateLimitState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = facdir_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::info!(env = %config.env, bind_addr = %config.bind_addr, "starting facdir-server");

    let pool_config = facdir_db::PoolConfig::from_app_config(&config);
    let pool = facdir_db::connect_pool(&config.database_url, pool_config).await?;
    let applied = facdir_db::run_migrations(&pool).await?;
    if applied > 0 {
        tracing::info!(applied, "database migrations applied");
    }

    let reference = load_reference_or_empty(&config.reference_path)?;

    let state = AppState {
        pool,
        facilities: Arc::new(FacilityCache::new(Duration::from_secs(
            config.facility_cache_ttl_secs,
        ))),
        reference: Arc::new(reference),
    };
    let rate_limit = RateLimitState::new(
        config.rate_limit_max_requests,
        Duration::from_secs(config.rate_limit_window_secs),
    );
    let app = build_app(state, rate_limit);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// A missing reference file serves empty state and type lists; any other
/// failure aborts startup.
fn load_reference_or_empty(path: &std::path::Path) -> Result<ReferenceData, ConfigError> {
    match facdir_core::load_reference(path) {
        Ok(reference) => {
            tracing::info!(
                states = reference.states.len(),
                facility_types = reference.facility_types.len(),
                "reference data loaded"
            );
            Ok(reference)
        }
        Err(ConfigError::FileIo { path, source })
            if source.kind() == std::io::ErrorKind::NotFound =>
        {
            tracing::warn!(%path, "reference file not found; serving empty reference lists");
            Ok(ReferenceData::default())
        }
        Err(e) => Err(e),
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
