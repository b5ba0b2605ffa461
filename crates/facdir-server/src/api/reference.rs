//! States, facility types, counties and cities.

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use facdir_core::{FacilityType, State as UsState};
use facdir_db::PlaceCountRow;
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct PlaceParams {
    pub state: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct PlaceItem {
    pub name: String,
    pub slug: String,
    pub state: String,
    pub state_abbr: String,
    pub facility_count: i64,
}

impl From<PlaceCountRow> for PlaceItem {
    fn from(row: PlaceCountRow) -> Self {
        Self {
            slug: facdir_core::slug::simple_slug(&row.name),
            name: row.name,
            state: row.state,
            state_abbr: row.state_abbr,
            facility_count: row.facility_count,
        }
    }
}

pub(super) async fn list_states(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<UsState>>> {
    Json(ApiResponse {
        data: state.reference.states.clone(),
        meta: ResponseMeta::new(req_id.0),
    })
}

/// Looks up by slug first, then by abbreviation.
pub(super) async fn get_state(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<UsState>>, ApiError> {
    let found = state
        .reference
        .state_by_slug(&slug)
        .or_else(|| state.reference.state_by_abbr(&slug))
        .cloned()
        .ok_or_else(|| {
            ApiError::new(
                req_id.0.clone(),
                "not_found",
                format!("state '{slug}' not found"),
            )
        })?;

    Ok(Json(ApiResponse {
        data: found,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn list_facility_types(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<FacilityType>>> {
    Json(ApiResponse {
        data: state.reference.facility_types.clone(),
        meta: ResponseMeta::new(req_id.0),
    })
}

pub(super) async fn list_counties(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<PlaceParams>,
) -> Result<Json<ApiResponse<Vec<PlaceItem>>>, ApiError> {
    let rows = facdir_db::list_distinct_counties(&state.pool, state_filter(&params))
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &facdir_db::DbError::from(e)))?;

    Ok(Json(ApiResponse {
        data: rows.into_iter().map(PlaceItem::from).collect(),
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn list_cities(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<PlaceParams>,
) -> Result<Json<ApiResponse<Vec<PlaceItem>>>, ApiError> {
    let rows = facdir_db::list_distinct_cities(&state.pool, state_filter(&params))
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &facdir_db::DbError::from(e)))?;

    Ok(Json(ApiResponse {
        data: rows.into_iter().map(PlaceItem::from).collect(),
        meta: ResponseMeta::new(req_id.0),
    }))
}

fn state_filter(params: &PlaceParams) -> Option<&str> {
    params
        .state
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
