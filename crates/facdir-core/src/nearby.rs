//! Radius search around a point.

use serde::Serialize;

use crate::facility::Facility;
use crate::related::distance::haversine_km;

pub const DEFAULT_RADIUS_KM: f64 = 25.0;
pub const DEFAULT_NEARBY_LIMIT: usize = 20;
pub const MAX_NEARBY_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct NearbyQuery {
    pub origin: (f64, f64),
    pub radius_km: f64,
    pub limit: usize,
}

impl NearbyQuery {
    /// Build a query around `origin`, applying defaults for a missing or
    /// non-positive radius and a missing limit.
    #[must_use]
    pub fn new(origin: (f64, f64), radius_km: Option<f64>, limit: Option<usize>) -> Self {
        Self {
            origin,
            radius_km: radius_km
                .filter(|r| r.is_finite() && *r > 0.0)
                .unwrap_or(DEFAULT_RADIUS_KM),
            limit: limit.unwrap_or(DEFAULT_NEARBY_LIMIT).min(MAX_NEARBY_LIMIT),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyFacility {
    #[serde(flatten)]
    pub facility: Facility,
    /// Kilometres from the query origin.
    pub distance_km: f64,
}

/// Geocoded facilities within `query.radius_km`, nearest first.
#[must_use]
pub fn find_nearby(facilities: &[Facility], query: &NearbyQuery) -> Vec<NearbyFacility> {
    let mut hits: Vec<(&Facility, f64)> = facilities
        .iter()
        .filter_map(|f| {
            let km = haversine_km(query.origin, f.coordinates()?);
            (km <= query.radius_km).then_some((f, km))
        })
        .collect();
    hits.sort_by(|a, b| a.1.total_cmp(&b.1));
    hits.truncate(query.limit);
    hits.into_iter()
        .map(|(f, km)| NearbyFacility {
            facility: f.clone(),
            distance_km: km,
        })
        .collect()
}
