use axum::{extract::State, Extension, Json};
use serde::Serialize;
use serde_json::Value;

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, AppState};

#[derive(Debug, Serialize)]
pub(super) struct TechnologiesResponse {
    status: bool,
    technologies: Vec<Value>,
}

pub(super) async fn list_technologies(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<TechnologiesResponse>, ApiError> {
    let technologies = folio_db::list_technologies(&state.pool)
        .await
        .map_err(|e| map_db_error(&req_id, &e))?;

    Ok(Json(TechnologiesResponse {
        status: true,
        technologies,
    }))
}
