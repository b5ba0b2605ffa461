//! Read operations for the `facilities` table.

use sqlx::PgPool;

use super::types::{FacilityRow, FacilityStatsRow, PlaceCountRow};

const FACILITY_COLUMNS: &str = "id, slug, name, address, city, county, state, state_abbr, \
     zip_code, latitude::float8 AS latitude, longitude::float8 AS longitude, \
     facility_type, type_slug, phone, website, description, \
     rating::float8 AS rating, review_count, photo, photo_url, \
     created_at, updated_at";

/// Return every facility, ordered by `name ASC, slug ASC`.
///
/// This is the pool the related, search and nearby endpoints work over.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn list_all_facilities(pool: &PgPool) -> Result<Vec<FacilityRow>, sqlx::Error> {
    sqlx::query_as::<_, FacilityRow>(&format!(
        "SELECT {FACILITY_COLUMNS} FROM facilities ORDER BY name ASC, slug ASC"
    ))
    .fetch_all(pool)
    .await
}

/// Fetch a single facility by its slug.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn get_facility_by_slug(
    pool: &PgPool,
    slug: &str,
) -> Result<Option<FacilityRow>, sqlx::Error> {
    sqlx::query_as::<_, FacilityRow>(&format!(
        "SELECT {FACILITY_COLUMNS} FROM facilities WHERE slug = $1"
    ))
    .bind(slug)
    .fetch_optional(pool)
    .await
}

/// Top-rated facilities, weighting rating by review volume.
///
/// Only facilities with a non-zero rating and at least one review qualify.
/// Ordered by `rating * log10(review_count + 1) DESC`, then `rating DESC`.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn list_featured_facilities(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<FacilityRow>, sqlx::Error> {
    sqlx::query_as::<_, FacilityRow>(&format!(
        "SELECT {FACILITY_COLUMNS} FROM facilities \
         WHERE rating IS NOT NULL \
           AND rating > 0 \
           AND review_count > 0 \
         ORDER BY rating::float8 * LOG((review_count + 1)::float8) DESC, \
                  rating DESC, \
                  slug ASC \
         LIMIT $1"
    ))
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Most recently updated facilities, ordered by `updated_at DESC, slug ASC`.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn list_recently_updated_facilities(
    pool: &PgPool,
    limit: i64,
) -> Result<Vec<FacilityRow>, sqlx::Error> {
    sqlx::query_as::<_, FacilityRow>(&format!(
        "SELECT {FACILITY_COLUMNS} FROM facilities \
         ORDER BY updated_at DESC, slug ASC \
         LIMIT $1"
    ))
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Aggregate directory totals in a single round-trip.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn load_facility_stats(pool: &PgPool) -> Result<FacilityStatsRow, sqlx::Error> {
    sqlx::query_as::<_, FacilityStatsRow>(
        "SELECT \
            COUNT(*) AS total_facilities, \
            COUNT(DISTINCT state_abbr) AS states_with_facilities, \
            COUNT(DISTINCT LOWER(city) || '|' || state_abbr) AS cities_with_facilities, \
            COUNT(DISTINCT LOWER(county) || '|' || state_abbr) FILTER (\
                WHERE county IS NOT NULL AND county != ''\
            ) AS counties_with_facilities, \
            COUNT(*) FILTER (WHERE rating IS NOT NULL AND rating > 0) AS rated_facilities, \
            COUNT(*) FILTER (\
                WHERE COALESCE(photo, '') != '' OR COALESCE(photo_url, '') != ''\
            ) AS facilities_with_photos \
         FROM facilities",
    )
    .fetch_one(pool)
    .await
}

/// Distinct counties with facility counts.
///
/// When `state` is given, only counties in that state are returned; it may be
/// a full state name or an abbreviation, compared case-insensitively.
/// Ordered by `name ASC`.
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn list_distinct_counties(
    pool: &PgPool,
    state: Option<&str>,
) -> Result<Vec<PlaceCountRow>, sqlx::Error> {
    sqlx::query_as::<_, PlaceCountRow>(
        "SELECT \
            county AS name, \
            MIN(state) AS state, \
            state_abbr, \
            COUNT(*) AS facility_count \
         FROM facilities \
         WHERE county IS NOT NULL \
           AND county != '' \
           AND ($1::text IS NULL OR LOWER(state) = LOWER($1) OR LOWER(state_abbr) = LOWER($1)) \
         GROUP BY county, state_abbr \
         ORDER BY county ASC, state_abbr ASC",
    )
    .bind(state)
    .fetch_all(pool)
    .await
}

/// Distinct cities with facility counts. `state` filters as in
/// [`list_distinct_counties`].
///
/// # Errors
///
/// Returns [`sqlx::Error`] if the query fails.
pub async fn list_distinct_cities(
    pool: &PgPool,
    state: Option<&str>,
) -> Result<Vec<PlaceCountRow>, sqlx::Error> {
    sqlx::query_as::<_, PlaceCountRow>(
        "SELECT \
            city AS name, \
            MIN(state) AS state, \
            state_abbr, \
            COUNT(*) AS facility_count \
         FROM facilities \
         WHERE ($1::text IS NULL OR LOWER(state) = LOWER($1) OR LOWER(state_abbr) = LOWER($1)) \
         GROUP BY city, state_abbr \
         ORDER BY city ASC, state_abbr ASC",
    )
    .bind(state)
    .fetch_all(pool)
    .await
}
