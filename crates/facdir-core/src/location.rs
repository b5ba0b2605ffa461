//! City, county and state listings over an in-memory facility snapshot.

use serde::Deserialize;

use crate::facility::Facility;

pub const MAX_LOCATION_LIMIT: usize = 500;

/// Listing parameters as they arrive in a query string.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LocationParams {
    pub state: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub limit: Option<String>,
}

/// Normalized listing filter. Every present value is trimmed and non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationFilter {
    pub state: Option<String>,
    pub city: Option<String>,
    pub county: Option<String>,
    pub limit: Option<usize>,
}

impl From<&LocationParams> for LocationFilter {
    fn from(params: &LocationParams) -> Self {
        let trimmed = |raw: Option<&String>| {
            raw.map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        Self {
            state: trimmed(params.state.as_ref()),
            city: trimmed(params.city.as_ref()),
            county: trimmed(params.county.as_ref()),
            limit: params
                .limit
                .as_deref()
                .and_then(|s| s.trim().parse::<usize>().ok())
                .map(|n| n.min(MAX_LOCATION_LIMIT)),
        }
    }
}

impl LocationFilter {
    /// True when no place filter is set; `limit` alone does not count.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.is_none() && self.city.is_none() && self.county.is_none()
    }

    /// City and county compare exactly, ignoring case. `state` may be a full
    /// name or an abbreviation.
    #[must_use]
    pub fn matches(&self, facility: &Facility) -> bool {
        self.city.as_deref().is_none_or(|c| facility.city_matches(c))
            && self
                .county
                .as_deref()
                .is_none_or(|c| facility.county_matches(c))
            && self
                .state
                .as_deref()
                .is_none_or(|s| facility.state_matches(s))
    }
}

/// Facilities matching `filter`, ordered by name then slug.
///
/// An empty filter matches nothing; callers reject it before getting here.
#[must_use]
pub fn list_by_location(facilities: &[Facility], filter: &LocationFilter) -> Vec<Facility> {
    if filter.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<&Facility> = facilities.iter().filter(|f| filter.matches(f)).collect();
    results.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.slug.cmp(&b.slug)));
    results
        .into_iter()
        .take(filter.limit.unwrap_or(usize::MAX))
        .cloned()
        .collect()
}
