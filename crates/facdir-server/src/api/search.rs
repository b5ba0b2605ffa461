use axum::{
    extract::{Query, State},
    Extension, Json,
};
use facdir_core::{search_facilities, Facility, SearchQuery};

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, ApiResponse, AppState, ResponseMeta};

pub(super) async fn search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<Vec<Facility>>>, ApiError> {
    let facilities = state
        .facilities
        .facilities(&state.pool)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data: search_facilities(&facilities, &query),
        meta: ResponseMeta::new(req_id.0),
    }))
}
