//! Relevance scoring of a candidate facility against a related-facilities
//! request.
//!
//! Branches run in a fixed order and every matching branch adds its points.
//! Only the first matching branch sets the match reason; later ones never
//! overwrite it. Reordering branches changes which label wins.

use crate::facility::Facility;

use super::distance::haversine_miles;
use super::{MatchReason, RelatedQuery};

const CITY_POINTS: u32 = 100;
const TYPE_AND_COUNTY_POINTS: u32 = 80;
const TYPE_POINTS: u32 = 40;
const COUNTY_POINTS: u32 = 30;
const TYPE_AND_STATE_POINTS: u32 = 50;
const STATE_POINTS: u32 = 20;
const QUALITY_POINTS: u32 = 5;
const REVIEW_COUNT_THRESHOLD: i32 = 10;
const NEARBY_MILES: f64 = 10.0;

/// A facility with its per-request relevance score.
#[derive(Debug, Clone)]
pub(crate) struct ScoredCandidate<'a> {
    pub facility: &'a Facility,
    pub score: u32,
    pub match_reason: Option<MatchReason>,
    /// Miles from the request origin; only set when both sides have coordinates.
    pub distance: Option<f64>,
}

impl<'a> ScoredCandidate<'a> {
    fn new(facility: &'a Facility) -> Self {
        Self {
            facility,
            score: 0,
            match_reason: None,
            distance: None,
        }
    }

    fn award(&mut self, points: u32, reason: MatchReason) {
        self.score += points;
        self.match_reason.get_or_insert(reason);
    }
}

/// Score `facility` against `query`.
pub(crate) fn score_candidate<'a>(facility: &'a Facility, query: &RelatedQuery) -> ScoredCandidate<'a> {
    let mut candidate = ScoredCandidate::new(facility);
    let city = query.city.as_deref();
    let kind = query.facility_type.as_deref();
    let state = query.state.as_deref();
    let county = query.county.as_deref();

    if let Some(city) = city {
        if facility.city_matches(city) {
            candidate.award(CITY_POINTS, MatchReason::SameCity);
        }
    }

    match (kind, county) {
        (Some(kind), Some(county)) => {
            let type_match = facility.type_matches(kind);
            let county_match = facility.county_matches(county);
            if type_match && county_match {
                candidate.award(TYPE_AND_COUNTY_POINTS, MatchReason::SameTypeAndCounty);
            } else if type_match {
                candidate.award(TYPE_POINTS, MatchReason::SameType);
            } else if county_match {
                candidate.award(COUNTY_POINTS, MatchReason::SameCounty);
            }
        }
        (Some(kind), None) => {
            if facility.type_matches(kind) {
                candidate.award(TYPE_POINTS, MatchReason::SameType);
            }
        }
        // A county without a type scores nothing on its own.
        (None, _) => {}
    }

    if let (Some(kind), Some(state)) = (kind, state) {
        if facility.type_matches(kind) && facility.state_matches(state) {
            candidate.award(TYPE_AND_STATE_POINTS, MatchReason::SameTypeAndState);
        }
    }

    if let Some(state) = state {
        if facility.state_matches(state) {
            candidate.award(STATE_POINTS, MatchReason::SameState);
        }
    }

    if let (Some(origin), Some(position)) = (query.origin, facility.coordinates()) {
        let miles = haversine_miles(origin, position);
        candidate.score += distance_bonus(miles);
        if candidate.match_reason.is_none() && miles < NEARBY_MILES {
            candidate.match_reason = Some(MatchReason::Nearby);
        }
        candidate.distance = Some(miles);
    }

    if facility.has_rating() {
        candidate.score += QUALITY_POINTS;
    }
    if facility.has_photo() {
        candidate.score += QUALITY_POINTS;
    }
    if facility.reviews() > REVIEW_COUNT_THRESHOLD {
        candidate.score += QUALITY_POINTS;
    }

    candidate
}

/// Tiered bonus for proximity to the request origin.
pub(crate) fn distance_bonus(miles: f64) -> u32 {
    if miles < 1.0 {
        50
    } else if miles < 5.0 {
        40
    } else if miles < 10.0 {
        30
    } else if miles < 25.0 {
        20
    } else if miles < 50.0 {
        10
    } else {
        0
    }
}
