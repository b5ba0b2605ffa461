//! The directory's facility record and the field comparisons the ranking and
//! search code rely on.
//!
//! All comparisons treat an absent field as "does not match".

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A listed facility, as read from the facility store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    /// Unique, URL-safe identifier. Immutable once assigned.
    pub slug: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub city: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    /// Full state name, e.g. `"Texas"`.
    pub state: String,
    /// Two-letter postal abbreviation, e.g. `"TX"`.
    pub state_abbr: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Human-readable type label, e.g. `"Detox Center"`.
    #[serde(rename = "type")]
    pub facility_type: String,
    /// Normalized type slug. See [`Facility::effective_type_slug`] for the
    /// fallback used when this is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Facility {
    /// Returns the stored type slug, or one derived from the type label by
    /// lowercasing it and replacing each whitespace run with `-`.
    #[must_use]
    pub fn effective_type_slug(&self) -> Cow<'_, str> {
        match self.type_slug.as_deref() {
            Some(slug) if !slug.is_empty() => Cow::Borrowed(slug),
            _ => Cow::Owned(derive_type_slug(&self.facility_type)),
        }
    }

    /// Returns `(latitude, longitude)` when the facility has been geocoded.
    ///
    /// Both values must be present, finite and non-zero; ungeocoded rows are
    /// sometimes stored as `0.0`.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) if is_set(lat) && is_set(lng) => Some((lat, lng)),
            _ => None,
        }
    }

    #[must_use]
    pub fn has_rating(&self) -> bool {
        self.rating.is_some_and(is_set)
    }

    #[must_use]
    pub fn has_photo(&self) -> bool {
        non_empty(self.photo.as_deref()) || non_empty(self.photo_url.as_deref())
    }

    /// Number of reviews, treating a missing count as zero.
    #[must_use]
    pub fn reviews(&self) -> i32 {
        self.review_count.unwrap_or(0)
    }

    #[must_use]
    pub fn city_matches(&self, city: &str) -> bool {
        eq_ignore_case(&self.city, city)
    }

    #[must_use]
    pub fn county_matches(&self, county: &str) -> bool {
        self.county
            .as_deref()
            .is_some_and(|c| eq_ignore_case(c, county))
    }

    /// `state` may be a full state name or an abbreviation.
    #[must_use]
    pub fn state_matches(&self, state: &str) -> bool {
        eq_ignore_case(&self.state, state) || eq_ignore_case(&self.state_abbr, state)
    }

    /// A type matches when the type slug equals `requested`, or the type label
    /// contains it. Both comparisons ignore case.
    #[must_use]
    pub fn type_matches(&self, requested: &str) -> bool {
        let requested = requested.to_lowercase();
        self.effective_type_slug().to_lowercase() == requested
            || self.facility_type.to_lowercase().contains(&requested)
    }
}

/// Lowercase `label` and collapse each whitespace run into a single `-`.
#[must_use]
pub fn derive_type_slug(label: &str) -> String {
    label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn is_set(value: f64) -> bool {
    value != 0.0 && !value.is_nan()
}

fn non_empty(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::Facility;

    /// Minimal facility used across the crate's unit tests.
    pub(crate) fn facility(slug: &str, city: &str, state: &str, abbr: &str) -> Facility {
        Facility {
            slug: slug.to_string(),
            name: format!("Facility {slug}"),
            address: None,
            city: city.to_string(),
            county: None,
            state: state.to_string(),
            state_abbr: abbr.to_string(),
            zip_code: None,
            latitude: None,
            longitude: None,
            facility_type: "Outpatient Clinic".to_string(),
            type_slug: None,
            phone: None,
            website: None,
            description: None,
            rating: None,
            review_count: None,
            photo: None,
            photo_url: None,
            updated_at: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::facility;

    #[test]
    fn effective_type_slug_prefers_stored_value() {
        let mut f = facility("a", "Austin", "Texas", "TX");
        f.type_slug = Some("detox-center".to_string());
        f.facility_type = "Medical Detox".to_string();
        assert_eq!(f.effective_type_slug(), "detox-center");
    }

    #[test]
    fn effective_type_slug_derives_from_label() {
        let mut f = facility("a", "Austin", "Texas", "TX");
        f.facility_type = "Sober  Living Home".to_string();
        assert_eq!(f.effective_type_slug(), "sober-living-home");

        f.type_slug = Some(String::new());
        assert_eq!(f.effective_type_slug(), "sober-living-home");
    }

    #[test]
    fn coordinates_require_both_values() {
        let mut f = facility("a", "Austin", "Texas", "TX");
        f.latitude = Some(30.27);
        assert_eq!(f.coordinates(), None);
        f.longitude = Some(-97.74);
        assert_eq!(f.coordinates(), Some((30.27, -97.74)));
    }

    #[test]
    fn zero_coordinates_count_as_ungeocoded() {
        let mut f = facility("a", "Austin", "Texas", "TX");
        f.latitude = Some(0.0);
        f.longitude = Some(-97.74);
        assert_eq!(f.coordinates(), None);
    }

    #[test]
    fn zero_rating_is_not_a_rating() {
        let mut f = facility("a", "Austin", "Texas", "TX");
        assert!(!f.has_rating());
        f.rating = Some(0.0);
        assert!(!f.has_rating());
        f.rating = Some(4.5);
        assert!(f.has_rating());
    }

    #[test]
    fn has_photo_checks_both_fields() {
        let mut f = facility("a", "Austin", "Texas", "TX");
        assert!(!f.has_photo());
        f.photo = Some(String::new());
        assert!(!f.has_photo());
        f.photo_url = Some("https://cdn.example.com/a.jpg".to_string());
        assert!(f.has_photo());
    }

    #[test]
    fn state_matches_name_or_abbreviation() {
        let f = facility("a", "Austin", "Texas", "TX");
        assert!(f.state_matches("texas"));
        assert!(f.state_matches("tx"));
        assert!(!f.state_matches("Oklahoma"));
    }

    #[test]
    fn county_missing_never_matches() {
        let mut f = facility("a", "Austin", "Texas", "TX");
        assert!(!f.county_matches("Travis"));
        f.county = Some("Travis".to_string());
        assert!(f.county_matches("TRAVIS"));
    }

    #[test]
    fn type_matches_slug_or_label_substring() {
        let mut f = facility("a", "Austin", "Texas", "TX");
        f.facility_type = "Residential Detox Center".to_string();
        assert!(f.type_matches("residential-detox-center"));
        assert!(f.type_matches("Detox"));
        assert!(!f.type_matches("detox-center"));
        assert!(!f.type_matches("sober-living"));
    }

    #[test]
    fn serializes_type_label_under_type_key() {
        let f = facility("a", "Austin", "Texas", "TX");
        let json = serde_json::to_value(&f).expect("serialize facility");
        assert_eq!(json["type"], "Outpatient Clinic");
        assert!(json.get("facility_type").is_none());
        assert!(json.get("county").is_none());
    }
}
