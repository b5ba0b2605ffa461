pub mod app_config;
pub mod config;
pub mod facility;
pub mod location;
pub mod nearby;
pub mod reference;
pub mod related;
pub mod search;
pub mod seed;
pub mod slug;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use facility::Facility;
pub use location::{list_by_location, LocationFilter, LocationParams};
pub use nearby::{find_nearby, NearbyFacility, NearbyQuery};
pub use reference::{load_reference, FacilityType, ReferenceData, State};
pub use related::{find_related, MatchReason, RelatedFacility, RelatedParams, RelatedQuery};
pub use search::{search_facilities, SearchQuery};
pub use seed::{load_seed_file, SeedFacility, SeedFile};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read {path}: {source}")]
    FileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation failed: {0}")]
    Validation(String),
}
