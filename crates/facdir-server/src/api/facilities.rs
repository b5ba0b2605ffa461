use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use facdir_core::{
    find_nearby, list_by_location, Facility, LocationFilter, LocationParams, NearbyFacility,
    NearbyQuery,
};
use serde::Deserialize;

use crate::middleware::RequestId;

use super::{
    map_db_error, normalize_limit, parse_f64, ApiError, ApiResponse, AppState, ResponseMeta,
};

const DEFAULT_FEATURED_LIMIT: usize = 10;
const MAX_FEATURED_LIMIT: usize = 50;
const DEFAULT_RECENT_LIMIT: usize = 10;
const MAX_RECENT_LIMIT: usize = 50;

#[derive(Debug, Deserialize)]
pub(super) struct NearbyParams {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub radius_km: Option<String>,
    pub limit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct LimitParams {
    pub limit: Option<String>,
}

pub(super) async fn list_facilities(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<LocationParams>,
) -> Result<Json<ApiResponse<Vec<Facility>>>, ApiError> {
    let filter = LocationFilter::from(&params);
    if filter.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "bad_request",
            "at least one of state, city or county is required",
        ));
    }

    let facilities = state
        .facilities
        .facilities(&state.pool)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: list_by_location(&facilities, &filter),
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn get_facility(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<Facility>>, ApiError> {
    let row = facdir_db::get_facility_by_slug(&state.pool, &slug)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &facdir_db::DbError::from(e)))?
        .ok_or_else(|| {
            ApiError::new(
                req_id.0.clone(),
                "not_found",
                format!("facility '{slug}' not found"),
            )
        })?;

    Ok(Json(ApiResponse {
        data: Facility::from(row),
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn list_nearby_facilities(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<NearbyParams>,
) -> Result<Json<ApiResponse<Vec<NearbyFacility>>>, ApiError> {
    let (Some(lat), Some(lng)) = (
        parse_f64(params.lat.as_deref()),
        parse_f64(params.lng.as_deref()),
    ) else {
        return Err(ApiError::new(
            req_id.0,
            "bad_request",
            "lat and lng are required numeric query parameters",
        ));
    };

    let limit = params
        .limit
        .as_deref()
        .and_then(|s| s.trim().parse::<usize>().ok());
    let query = NearbyQuery::new((lat, lng), parse_f64(params.radius_km.as_deref()), limit);

    let facilities = state
        .facilities
        .facilities(&state.pool)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: find_nearby(&facilities, &query),
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn list_featured_facilities(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<LimitParams>,
) -> Result<Json<ApiResponse<Vec<Facility>>>, ApiError> {
    let limit = normalize_limit(
        params.limit.as_deref(),
        DEFAULT_FEATURED_LIMIT,
        MAX_FEATURED_LIMIT,
    );

    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    let rows = facdir_db::list_featured_facilities(&state.pool, limit)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &facdir_db::DbError::from(e)))?;

    Ok(Json(ApiResponse {
        data: rows.into_iter().map(Facility::from).collect(),
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn list_recent_facilities(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<LimitParams>,
) -> Result<Json<ApiResponse<Vec<Facility>>>, ApiError> {
    let limit = normalize_limit(params.limit.as_deref(), DEFAULT_RECENT_LIMIT, MAX_RECENT_LIMIT);

    let limit = i64::try_from(limit).unwrap_or(i64::MAX);
    let rows = facdir_db::list_recently_updated_facilities(&state.pool, limit)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &facdir_db::DbError::from(e)))?;

    Ok(Json(ApiResponse {
        data: rows.into_iter().map(Facility::from).collect(),
        meta: ResponseMeta::new(req_id.0),
    }))
}
