//! GET /api/v1/related-facilities

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Extension, Json,
};
use facdir_core::{find_related, RelatedFacility, RelatedParams, RelatedQuery};
use serde::Serialize;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState, ErrorBody, ResponseMeta};

pub(super) const RELATED_CACHE_CONTROL: &str =
    "public, s-maxage=3600, stale-while-revalidate=86400";

/// Failure body for this endpoint. Clients always get a `data` array, even
/// when the facility store is unavailable.
#[derive(Debug, Serialize)]
pub(super) struct DegradedResponse {
    pub data: Vec<RelatedFacility>,
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

pub(super) async fn list_related_facilities(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<RelatedParams>,
) -> Response {
    let query = RelatedQuery::from(params);

    let facilities = match state.facilities.facilities(&state.pool).await {
        Ok(facilities) => facilities,
        Err(e) => {
            tracing::error!(error = %e, "failed to load facilities for related lookup");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(DegradedResponse {
                    data: Vec::new(),
                    error: ErrorBody {
                        code: "internal_error".to_string(),
                        message: "failed to fetch related facilities".to_string(),
                    },
                    meta: ResponseMeta::new(req_id.0),
                }),
            )
                .into_response();
        }
    };

    let data = find_related(&facilities, &query);
    tracing::debug!(
        exclude = query.exclude.as_deref().unwrap_or(""),
        results = data.len(),
        "related facilities ranked"
    );

    (
        [(header::CACHE_CONTROL, RELATED_CACHE_CONTROL)],
        Json(ApiResponse {
            data,
            meta: ResponseMeta::new(req_id.0),
        }),
    )
        .into_response()
}
