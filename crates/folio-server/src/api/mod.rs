mod profile;
mod projects;
mod resume;
mod technologies;

use std::path::Path;

use axum::{
    extract::State,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Extension, Json, Router,
};
use serde::Serialize;
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::middleware::{request_id, RequestId};

/// Process-wide service state, built once in `main` and cloned into handlers.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Internal,
}

/// Failure body: `{"status": false, "message": "..."}`.
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    kind: ErrorKind,
    status: bool,
    message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: bool,
    database: &'static str,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            status: false,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.kind {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

pub(super) fn map_db_error(req_id: &RequestId, error: &folio_db::DbError) -> ApiError {
    tracing::error!(request_id = %req_id.0, error = %error, "database query failed");
    ApiError::new(ErrorKind::Internal, error.to_string())
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static("x-request-id")])
        .expose_headers([header::CONTENT_DISPOSITION])
}

fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/profile", get(profile::get_profile))
        .route("/projects", get(projects::list_projects))
        .route("/resume", get(resume::get_resume))
        .route("/technologies", get(technologies::list_technologies))
        .fallback(api_not_found)
}

/// Builds the full application: the `/v1` API plus the single-page web
/// bundle served from `web_dist`, where unknown paths fall back to
/// `index.html` so client-side routes resolve.
pub fn build_app(state: AppState, web_dist: &Path) -> Router {
    let spa = ServeDir::new(web_dist).fallback(ServeFile::new(web_dist.join("index.html")));

    Router::new()
        .nest("/v1", api_router())
        .fallback_service(spa)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn(request_id))
                .layer(TraceLayer::new_for_http())
                .layer(build_cors()),
        )
        .with_state(state)
}

async fn api_not_found() -> ApiError {
    ApiError::not_found("Not found")
}

async fn health(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> impl IntoResponse {
    match folio_db::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthData {
                status: true,
                database: "ok",
            }),
        ),
        Err(e) => {
            tracing::warn!(request_id = %req_id.0, error = %e, "health check: database unavailable");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthData {
                    status: false,
                    database: "unavailable",
                }),
            )
        }
    }
}

#[cfg(test)]
#[path = "api_test.rs"]
mod tests;
