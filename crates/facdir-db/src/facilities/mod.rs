//! Database operations for the `facilities` table.

mod read;
mod types;
mod write;

pub use read::{
    get_facility_by_slug, list_all_facilities, list_distinct_cities, list_distinct_counties,
    list_featured_facilities, list_recently_updated_facilities, load_facility_stats,
};
pub use types::{FacilityRow, FacilityStatsRow, PlaceCountRow};
pub use write::upsert_facilities;
