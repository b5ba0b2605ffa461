//! Short-lived in-memory snapshot of the facility table.
//!
//! Related, search and nearby requests all work over the full facility set.
//! The snapshot is reloaded once it is older than the configured TTL; a TTL
//! of zero reloads on every request.

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};

use facdir_core::Facility;
use facdir_db::DbError;
use sqlx::PgPool;
use tokio::sync::RwLock;

pub type FacilitySnapshot = Arc<Vec<Facility>>;

struct Entry {
    loaded_at: Instant,
    facilities: FacilitySnapshot,
}

pub struct FacilityCache {
    ttl: Duration,
    entry: RwLock<Option<Entry>>,
}

impl FacilityCache {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: RwLock::new(None),
        }
    }

    /// Current facility snapshot, loading it from `pool` when stale.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the facility table cannot be read.
    pub async fn facilities(&self, pool: &PgPool) -> Result<FacilitySnapshot, DbError> {
        self.get_or_load(|| async {
            let rows = facdir_db::list_all_facilities(pool).await?;
            Ok::<Vec<Facility>, DbError>(rows.into_iter().map(Facility::from).collect())
        })
        .await
    }

    async fn get_or_load<F, Fut>(&self, load: F) -> Result<FacilitySnapshot, DbError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Facility>, DbError>>,
    {
        if !self.ttl.is_zero() {
            let entry = self.entry.read().await;
            if let Some(entry) = entry.as_ref() {
                if entry.loaded_at.elapsed() < self.ttl {
                    return Ok(Arc::clone(&entry.facilities));
                }
            }
        }

        let facilities: FacilitySnapshot = Arc::new(load().await?);
        tracing::debug!(count = facilities.len(), "facility snapshot loaded");

        if !self.ttl.is_zero() {
            *self.entry.write().await = Some(Entry {
                loaded_at: Instant::now(),
                facilities: Arc::clone(&facilities),
            });
        }
        Ok(facilities)
    }
}
