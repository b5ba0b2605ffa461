use facdir_core::{Facility, SeedFacility};
use sqlx::PgPool;

use crate::facilities::upsert_facilities;
use crate::DbError;

/// Upsert seed facilities into the database.
///
/// Returns `(new_count, updated_count)`. The whole batch runs inside one
/// transaction and is rolled back if any part fails.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] if any database operation fails.
pub async fn seed_facilities(
    pool: &PgPool,
    entries: Vec<SeedFacility>,
) -> Result<(u64, u64), DbError> {
    let facilities: Vec<Facility> = entries
        .into_iter()
        .map(SeedFacility::into_facility)
        .collect();

    let mut tx = pool.begin().await?;
    let counts = upsert_facilities(&mut *tx, &facilities).await?;
    tx.commit().await?;
    Ok(counts)
}
