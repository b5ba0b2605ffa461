//! Free-text directory search over an in-memory facility snapshot.

use std::cmp::Ordering;

use serde::Deserialize;

use crate::facility::Facility;

pub const MAX_SEARCH_LIMIT: usize = 500;

/// Search parameters as they arrive in a query string.
///
/// Every field is optional. `"all"` for `type` or `state` disables that filter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub facility_type: Option<String>,
    pub state: Option<String>,
    pub limit: Option<String>,
}

struct Criteria {
    text: String,
    type_slug: Option<String>,
    state: Option<String>,
    limit: Option<usize>,
}

impl Criteria {
    fn from_query(query: &SearchQuery) -> Self {
        let normalize = |raw: Option<&String>| {
            raw.map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty() && s != "all")
        };
        Self {
            text: query
                .q
                .as_deref()
                .map(|s| s.trim().to_lowercase())
                .unwrap_or_default(),
            type_slug: normalize(query.facility_type.as_ref()),
            state: normalize(query.state.as_ref()),
            limit: query
                .limit
                .as_deref()
                .and_then(|s| s.trim().parse::<usize>().ok())
                .map(|n| n.min(MAX_SEARCH_LIMIT)),
        }
    }

    fn is_empty(&self) -> bool {
        self.text.is_empty() && self.type_slug.is_none() && self.state.is_none()
    }

    fn matches(&self, facility: &Facility) -> bool {
        self.matches_text(facility) && self.matches_type(facility) && self.matches_state(facility)
    }

    fn matches_text(&self, facility: &Facility) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let contains = |field: &str| field.to_lowercase().contains(&self.text);
        contains(&facility.name)
            || contains(&facility.city)
            || contains(&facility.state)
            || contains(&facility.facility_type)
            || facility.county.as_deref().is_some_and(contains)
            || facility.zip_code.as_deref().is_some_and(contains)
            || facility.address.as_deref().is_some_and(contains)
    }

    fn matches_type(&self, facility: &Facility) -> bool {
        self.type_slug
            .as_deref()
            .is_none_or(|t| facility.effective_type_slug().to_lowercase() == t)
    }

    fn matches_state(&self, facility: &Facility) -> bool {
        self.state
            .as_deref()
            .is_none_or(|s| facility.state_matches(s))
    }

    fn is_exact(&self, facility: &Facility) -> bool {
        facility.name.to_lowercase() == self.text || facility.city.to_lowercase() == self.text
    }
}

/// Filter and order `facilities` for a search request.
///
/// With no text and no filters every facility is returned in store order.
/// Otherwise results put exact name/city matches first, then sort by rating
/// (missing ratings count as zero). The sort is stable.
#[must_use]
pub fn search_facilities(facilities: &[Facility], query: &SearchQuery) -> Vec<Facility> {
    let criteria = Criteria::from_query(query);
    let limit = criteria.limit.unwrap_or(usize::MAX);

    if criteria.is_empty() {
        return facilities.iter().take(limit).cloned().collect();
    }

    let mut results: Vec<&Facility> = facilities.iter().filter(|f| criteria.matches(f)).collect();
    results.sort_by(|a, b| match (criteria.is_exact(a), criteria.is_exact(b)) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => b
            .rating
            .unwrap_or(0.0)
            .total_cmp(&a.rating.unwrap_or(0.0)),
    });
    results.into_iter().take(limit).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::test_support::facility;

    fn pool() -> Vec<Facility> {
        let mut a = facility("austin-detox", "Austin", "Texas", "TX");
        a.name = "Austin Detox".to_string();
        a.facility_type = "Detox Center".to_string();
        a.rating = Some(3.9);

        let mut b = facility("lake-austin-rehab", "Lakeway", "Texas", "TX");
        b.name = "Lake Austin Rehab".to_string();
        b.rating = Some(4.8);

        let mut c = facility("tulsa-detox", "Tulsa", "Oklahoma", "OK");
        c.name = "Tulsa Detox".to_string();
        c.facility_type = "Detox Center".to_string();
        c.zip_code = Some("74103".to_string());

        let mut d = facility("austin", "Round Rock", "Texas", "TX");
        d.name = "Austin".to_string();
        d.rating = Some(2.0);

        vec![a, b, c, d]
    }

    fn query(q: &str) -> SearchQuery {
        SearchQuery {
            q: Some(q.to_string()),
            ..SearchQuery::default()
        }
    }

    fn slugs(results: &[Facility]) -> Vec<&str> {
        results.iter().map(|f| f.slug.as_str()).collect()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let results = search_facilities(&pool(), &SearchQuery::default());
        assert_eq!(
            slugs(&results),
            vec!["austin-detox", "lake-austin-rehab", "tulsa-detox", "austin"]
        );
    }

    #[test]
    fn exact_matches_come_first_then_rating() {
        let results = search_facilities(&pool(), &query("  AUSTIN "));
        // "Austin" exact name and "Austin" exact city first, in rating order
        assert_eq!(
            slugs(&results),
            vec!["austin-detox", "austin", "lake-austin-rehab"]
        );
    }

    #[test]
    fn matches_zip_code() {
        let results = search_facilities(&pool(), &query("7410"));
        assert_eq!(slugs(&results), vec!["tulsa-detox"]);
    }

    #[test]
    fn type_filter_uses_type_slug() {
        let q = SearchQuery {
            facility_type: Some("detox-center".to_string()),
            ..SearchQuery::default()
        };
        let results = search_facilities(&pool(), &q);
        assert_eq!(slugs(&results), vec!["austin-detox", "tulsa-detox"]);
    }

    #[test]
    fn state_filter_accepts_abbreviation_and_all() {
        let q = SearchQuery {
            q: Some("detox".to_string()),
            state: Some("ok".to_string()),
            ..SearchQuery::default()
        };
        assert_eq!(slugs(&search_facilities(&pool(), &q)), vec!["tulsa-detox"]);

        let q = SearchQuery {
            q: Some("detox".to_string()),
            state: Some("all".to_string()),
            ..SearchQuery::default()
        };
        assert_eq!(search_facilities(&pool(), &q).len(), 2);
    }

    #[test]
    fn limit_caps_results() {
        let q = SearchQuery {
            limit: Some("1".to_string()),
            ..SearchQuery::default()
        };
        assert_eq!(search_facilities(&pool(), &q).len(), 1);
    }
}
