//! Row types for the `facilities` table.

use chrono::{DateTime, Utc};
use facdir_core::Facility;

/// A row from the `facilities` table.
///
/// `latitude`, `longitude` and `rating` are `NUMERIC` columns; read queries
/// cast them to `float8` so they decode straight into `f64`.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FacilityRow {
    pub id: i64,
    pub slug: String,
    pub name: String,
    pub address: Option<String>,
    pub city: String,
    pub county: Option<String>,
    pub state: String,
    pub state_abbr: String,
    pub zip_code: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub facility_type: String,
    pub type_slug: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<i32>,
    pub photo: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FacilityRow> for Facility {
    fn from(row: FacilityRow) -> Self {
        Facility {
            slug: row.slug,
            name: row.name,
            address: row.address,
            city: row.city,
            county: row.county,
            state: row.state,
            state_abbr: row.state_abbr,
            zip_code: row.zip_code,
            latitude: row.latitude,
            longitude: row.longitude,
            facility_type: row.facility_type,
            type_slug: row.type_slug,
            phone: row.phone,
            website: row.website,
            description: row.description,
            rating: row.rating,
            review_count: row.review_count,
            photo: row.photo,
            photo_url: row.photo_url,
            updated_at: Some(row.updated_at),
        }
    }
}

/// Directory-wide totals for the stats endpoint.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct FacilityStatsRow {
    pub total_facilities: i64,
    /// Distinct `state_abbr` values with at least one facility.
    pub states_with_facilities: i64,
    /// Distinct `(city, state_abbr)` pairs.
    pub cities_with_facilities: i64,
    /// Distinct `(county, state_abbr)` pairs, ignoring missing counties.
    pub counties_with_facilities: i64,
    pub rated_facilities: i64,
    pub facilities_with_photos: i64,
}

/// A county or city with its facility count.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct PlaceCountRow {
    pub name: String,
    pub state: String,
    pub state_abbr: String,
    pub facility_count: i64,
}
