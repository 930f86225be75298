use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};

use crate::{
    error::{Error, Result},
    AppState,
};

#[axum::debug_handler]
pub async fn download_file(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let file = state
        .file_service
        .find_by_id(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("File {} not found", id)))?;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        file.name.replace(['"', '\\', '\r', '\n'], "_")
    );
    Ok((
        [
            (header::CONTENT_TYPE, "application/octet-stream".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.content,
    ))
}
