//! Related-facility recommendations.
//!
//! [`find_related`] scores every facility in the pool against a
//! [`RelatedQuery`], drops unrelated ones and returns the best matches. It is
//! a pure function of its inputs; callers own loading and caching the pool.

pub mod distance;
mod ranker;
mod scorer;

use serde::{Deserialize, Serialize};

use crate::facility::Facility;

pub const DEFAULT_RELATED_LIMIT: usize = 12;
pub const MAX_RELATED_LIMIT: usize = 100;

/// Why a facility was surfaced. Serialized as the display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchReason {
    #[serde(rename = "Same City")]
    SameCity,
    #[serde(rename = "Same Type & County")]
    SameTypeAndCounty,
    #[serde(rename = "Same Type")]
    SameType,
    #[serde(rename = "Same County")]
    SameCounty,
    #[serde(rename = "Same Type & State")]
    SameTypeAndState,
    #[serde(rename = "Same State")]
    SameState,
    #[serde(rename = "Nearby")]
    Nearby,
}

impl MatchReason {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MatchReason::SameCity => "Same City",
            MatchReason::SameTypeAndCounty => "Same Type & County",
            MatchReason::SameType => "Same Type",
            MatchReason::SameCounty => "Same County",
            MatchReason::SameTypeAndState => "Same Type & State",
            MatchReason::SameState => "Same State",
            MatchReason::Nearby => "Nearby",
        }
    }
}

impl std::fmt::Display for MatchReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw, unvalidated request parameters, as they arrive in a query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RelatedParams {
    pub exclude: Option<String>,
    pub city: Option<String>,
    #[serde(rename = "type")]
    pub facility_type: Option<String>,
    pub state: Option<String>,
    pub county: Option<String>,
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub limit: Option<String>,
}

/// A parsed related-facilities request. Empty strings are treated as absent.
#[derive(Debug, Clone, PartialEq)]
pub struct RelatedQuery {
    /// Slug of the reference facility, never returned.
    pub exclude: Option<String>,
    pub city: Option<String>,
    pub facility_type: Option<String>,
    pub state: Option<String>,
    pub county: Option<String>,
    /// Reference `(latitude, longitude)`.
    pub origin: Option<(f64, f64)>,
    pub limit: usize,
}

impl Default for RelatedQuery {
    fn default() -> Self {
        Self {
            exclude: None,
            city: None,
            facility_type: None,
            state: None,
            county: None,
            origin: None,
            limit: DEFAULT_RELATED_LIMIT,
        }
    }
}

impl From<RelatedParams> for RelatedQuery {
    fn from(params: RelatedParams) -> Self {
        Self {
            origin: parse_origin(params.lat.as_deref(), params.lng.as_deref()),
            limit: parse_limit(params.limit.as_deref()),
            exclude: non_empty(params.exclude),
            city: non_empty(params.city),
            facility_type: non_empty(params.facility_type),
            state: non_empty(params.state),
            county: non_empty(params.county),
        }
    }
}

/// A related facility as exposed to API clients. The ranking score is
/// internal and deliberately absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RelatedFacility {
    #[serde(flatten)]
    pub facility: Facility,
    /// Miles from the request origin.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(rename = "matchReason", skip_serializing_if = "Option::is_none")]
    pub match_reason: Option<MatchReason>,
}

/// Rank `facilities` by relevance to `query`.
///
/// Never fails: an empty pool, or a pool without the excluded facility,
/// simply produces fewer (or unfiltered) results.
#[must_use]
pub fn find_related(facilities: &[Facility], query: &RelatedQuery) -> Vec<RelatedFacility> {
    let candidates = facilities
        .iter()
        .filter(|f| query.exclude.as_deref() != Some(f.slug.as_str()))
        .map(|f| scorer::score_candidate(f, query))
        .collect();
    ranker::rank(candidates, query.limit)
}

/// Parse a coordinate pair. Either value missing, unparseable or non-finite
/// disables the distance bonus rather than failing the request.
#[must_use]
pub fn parse_origin(lat: Option<&str>, lng: Option<&str>) -> Option<(f64, f64)> {
    let parse = |raw: Option<&str>| {
        raw.map(str::trim)
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse::<f64>().ok())
            .filter(|v| v.is_finite())
    };
    Some((parse(lat)?, parse(lng)?))
}

/// Parse a result limit, falling back to [`DEFAULT_RELATED_LIMIT`] when
/// missing or malformed and capping at [`MAX_RELATED_LIMIT`].
#[must_use]
pub fn parse_limit(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_RELATED_LIMIT)
        .min(MAX_RELATED_LIMIT)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
