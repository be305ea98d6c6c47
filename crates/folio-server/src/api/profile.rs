use axum::{extract::State, Extension, Json};
use folio_core::ProfileView;
use serde::Serialize;

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, AppState};

#[derive(Debug, Serialize)]
pub(super) struct ProfileResponse {
    status: bool,
    profile: ProfileView,
}

pub(super) async fn get_profile(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let row = folio_db::get_profile(&state.pool)
        .await
        .map_err(|e| map_db_error(&req_id, &e))?;

    let profile = folio_core::project_profile(row.as_ref())
        .ok_or_else(|| ApiError::not_found("Profile not found"))?;

    Ok(Json(ProfileResponse {
        status: true,
        profile,
    }))
}
