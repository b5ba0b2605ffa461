use axum::{extract::State, Extension, Json};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct StatsData {
    pub total_facilities: i64,
    pub states_with_facilities: i64,
    pub cities_with_facilities: i64,
    pub counties_with_facilities: i64,
    pub rated_facilities: i64,
    pub facilities_with_photos: i64,
    pub reference_states: usize,
    pub facility_types: usize,
}

pub(super) async fn get_stats(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<StatsData>>, ApiError> {
    let row = facdir_db::load_facility_stats(&state.pool)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &facdir_db::DbError::from(e)))?;

    Ok(Json(ApiResponse {
        data: StatsData {
            total_facilities: row.total_facilities,
            states_with_facilities: row.states_with_facilities,
            cities_with_facilities: row.cities_with_facilities,
            counties_with_facilities: row.counties_with_facilities,
            rated_facilities: row.rated_facilities,
            facilities_with_photos: row.facilities_with_photos,
            reference_states: state.reference.states.len(),
            facility_types: state.reference.facility_types.len(),
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
