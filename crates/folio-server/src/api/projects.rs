use axum::{extract::State, Extension, Json};
use folio_core::ProjectView;
use serde::Serialize;

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, AppState};

#[derive(Debug, Serialize)]
pub(super) struct ProjectsResponse {
    status: bool,
    projects: Vec<ProjectView>,
}

pub(super) async fn list_projects(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ProjectsResponse>, ApiError> {
    let rows = folio_db::list_projects(&state.pool)
        .await
        .map_err(|e| map_db_error(&req_id, &e))?;

    tracing::debug!(request_id = %req_id.0, count = rows.len(), "projects loaded");

    Ok(Json(ProjectsResponse {
        status: true,
        projects: folio_core::project_project_list(&rows),
    }))
}
