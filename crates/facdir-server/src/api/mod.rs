mod facilities;
mod reference;
mod related;
mod search;
mod stats;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use facdir_core::ReferenceData;
use serde::Serialize;
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::cache::FacilityCache;
use crate::middleware::{enforce_rate_limit, request_id, RateLimitState, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub facilities: Arc<FacilityCache>,
    pub reference: Arc<ReferenceData>,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    database: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" | "validation_error" => StatusCode::BAD_REQUEST,
            "rate_limited" => StatusCode::TOO_MANY_REQUESTS,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Parse an optional query-string limit. Missing or malformed values fall
/// back to `default`; the result is clamped to `1..=max`.
pub(super) fn normalize_limit(raw: Option<&str>, default: usize, max: usize) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .unwrap_or(default)
        .clamp(1, max)
}

/// Parse an optional numeric query value, treating blanks, garbage and
/// non-finite numbers as absent.
pub(super) fn parse_f64(raw: Option<&str>) -> Option<f64> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

pub(super) fn map_db_error(request_id: String, error: &facdir_db::DbError) -> ApiError {
    tracing::error!(error = %error, "database query failed");
    ApiError::new(request_id, "internal_error", "database query failed")
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
}

fn directory_router(rate_limit: RateLimitState) -> Router<AppState> {
    Router::new()
        .route(
            "/api/v1/related-facilities",
            get(related::list_related_facilities),
        )
        .route("/api/v1/search", get(search::search))
        .route("/api/v1/facilities", get(facilities::list_facilities))
        .route(
            "/api/v1/facilities/nearby",
            get(facilities::list_nearby_facilities),
        )
        .route(
            "/api/v1/facilities/featured",
            get(facilities::list_featured_facilities),
        )
        .route(
            "/api/v1/facilities/recent",
            get(facilities::list_recent_facilities),
        )
        .route("/api/v1/facilities/{slug}", get(facilities::get_facility))
        .route("/api/v1/stats", get(stats::get_stats))
        .route("/api/v1/states", get(reference::list_states))
        .route("/api/v1/states/{slug}", get(reference::get_state))
        .route("/api/v1/facility-types", get(reference::list_facility_types))
        .route("/api/v1/counties", get(reference::list_counties))
        .route("/api/v1/cities", get(reference::list_cities))
        .layer(axum::middleware::from_fn_with_state(
            rate_limit,
            enforce_rate_limit,
        ))
}

pub fn build_app(state: AppState, rate_limit: RateLimitState) -> Router {
    let public_routes = Router::new().route("/api/v1/health", get(health));

    Router::new()
        .merge(public_routes)
        .merge(directory_router(rate_limit))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    let meta = ResponseMeta::new(req_id.0);

    match facdir_db::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse {
                data: HealthData {
                    status: "ok",
                    database: "ok",
                },
                meta,
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "health check: database unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse {
                    data: HealthData {
                        status: "degraded",
                        database: "unavailable",
                    },
                    meta,
                }),
            )
        }
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
