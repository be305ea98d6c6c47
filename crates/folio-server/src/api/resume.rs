use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Extension,
};

use crate::middleware::RequestId;

use super::{map_db_error, ApiError, AppState};

const RESUME_DISPOSITION: &str = "attachment; filename=\"resume.pdf\"";

/// Streams the stored resume as a PDF attachment.
pub(super) async fn get_resume(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Response, ApiError> {
    let row = folio_db::get_profile(&state.pool)
        .await
        .map_err(|e| map_db_error(&req_id, &e))?;

    let bytes = folio_core::project_resume_bytes(row.as_ref())
        .ok_or_else(|| ApiError::not_found("Resume not found"))?
        .to_vec();

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (header::CONTENT_DISPOSITION, RESUME_DISPOSITION),
        ],
        bytes,
    )
        .into_response())
}
