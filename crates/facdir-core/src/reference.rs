//! State and facility-type reference lists.
//!
//! Loaded once at startup from a YAML file shaped like:
//!
//! ```yaml
//! states:
//!   - name: Texas
//!     abbr: TX
//!     slug: texas
//! facility_types:
//!   - slug: detox-center
//!     name: Detox Center
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::facility::eq_ignore_case;
use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub name: String,
    pub abbr: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capital: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub major_cities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityType {
    pub slug: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub search_terms: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    #[serde(default)]
    pub states: Vec<State>,
    #[serde(default)]
    pub facility_types: Vec<FacilityType>,
}

impl ReferenceData {
    #[must_use]
    pub fn state_by_slug(&self, slug: &str) -> Option<&State> {
        self.states.iter().find(|s| s.slug == slug)
    }

    #[must_use]
    pub fn state_by_abbr(&self, abbr: &str) -> Option<&State> {
        self.states.iter().find(|s| eq_ignore_case(&s.abbr, abbr))
    }

    #[must_use]
    pub fn facility_type_by_slug(&self, slug: &str) -> Option<&FacilityType> {
        self.facility_types.iter().find(|t| t.slug == slug)
    }
}

/// Load and validate reference data from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_reference(path: &Path) -> Result<ReferenceData, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let data: ReferenceData = serde_yaml::from_str(&content)?;
    validate_reference(&data)?;
    Ok(data)
}

fn validate_reference(data: &ReferenceData) -> Result<(), ConfigError> {
    let mut seen_slugs = HashSet::new();
    let mut seen_abbrs = HashSet::new();

    for state in &data.states {
        if state.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "state name must be non-empty".to_string(),
            ));
        }
        if !seen_slugs.insert(state.slug.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate state slug: '{}'",
                state.slug
            )));
        }
        if !seen_abbrs.insert(state.abbr.to_uppercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate state abbreviation: '{}'",
                state.abbr
            )));
        }
    }

    let mut seen_types = HashSet::new();
    for kind in &data.facility_types {
        if kind.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "facility type name must be non-empty".to_string(),
            ));
        }
        if !seen_types.insert(kind.slug.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate facility type slug: '{}'",
                kind.slug
            )));
        }
    }

    Ok(())
}
