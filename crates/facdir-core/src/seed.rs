//! Seed-file loading for populating the facility table.

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::facility::{derive_type_slug, Facility};
use crate::slug::facility_slug;
use crate::ConfigError;

#[derive(Debug, Clone, Deserialize)]
pub struct SeedFile {
    pub facilities: Vec<SeedFacility>,
}

/// One facility entry in a seed file. `slug` and `type_slug` are derived when
/// omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedFacility {
    #[serde(default)]
    pub slug: Option<String>,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    pub city: String,
    #[serde(default)]
    pub county: Option<String>,
    pub state: String,
    pub state_abbr: String,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(rename = "type")]
    pub facility_type: String,
    #[serde(default)]
    pub type_slug: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub review_count: Option<i32>,
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl SeedFacility {
    #[must_use]
    pub fn resolved_slug(&self) -> String {
        match self.slug.as_deref().map(str::trim) {
            Some(slug) if !slug.is_empty() => slug.to_string(),
            _ => facility_slug(&self.name, &self.city, Some(&self.state_abbr)),
        }
    }

    /// Convert into a [`Facility`], filling in derived slugs. `updated_at` is
    /// left for the store to assign.
    #[must_use]
    pub fn into_facility(self) -> Facility {
        let slug = self.resolved_slug();
        let type_slug = self
            .type_slug
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| derive_type_slug(&self.facility_type));
        Facility {
            slug,
            name: self.name,
            address: self.address,
            city: self.city,
            county: self.county,
            state: self.state,
            state_abbr: self.state_abbr,
            zip_code: self.zip_code,
            latitude: self.latitude,
            longitude: self.longitude,
            facility_type: self.facility_type,
            type_slug: Some(type_slug),
            phone: self.phone,
            website: self.website,
            description: self.description,
            rating: self.rating,
            review_count: self.review_count,
            photo: self.photo,
            photo_url: self.photo_url,
            updated_at: None,
        }
    }
}

/// Load and validate a YAML seed file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_seed_file(path: &Path) -> Result<SeedFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file: SeedFile = serde_yaml::from_str(&content)?;
    validate_seed(&file)?;
    Ok(file)
}

fn validate_seed(file: &SeedFile) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for entry in &file.facilities {
        let required = [
            ("name", &entry.name),
            ("city", &entry.city),
            ("state", &entry.state),
            ("state_abbr", &entry.state_abbr),
            ("type", &entry.facility_type),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "facility '{}' has an empty {field}",
                    entry.name
                )));
            }
        }

        if entry.latitude.is_some() != entry.longitude.is_some() {
            return Err(ConfigError::Validation(format!(
                "facility '{}' must set both latitude and longitude or neither",
                entry.name
            )));
        }

        if let Some(rating) = entry.rating {
            if !(0.0..=5.0).contains(&rating) {
                return Err(ConfigError::Validation(format!(
                    "facility '{}' has rating {rating} outside 0..=5",
                    entry.name
                )));
            }
        }

        if let Some(count) = entry.review_count.filter(|c| *c < 0) {
            return Err(ConfigError::Validation(format!(
                "facility '{}' has negative review_count {count}",
                entry.name
            )));
        }

        let slug = entry.resolved_slug();
        if slug.is_empty() {
            return Err(ConfigError::Validation(format!(
                "facility '{}' produces an empty slug",
                entry.name
            )));
        }
        if !seen.insert(slug.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate facility slug: '{slug}'"
            )));
        }
    }

    Ok(())
}
