use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::candidate_dto::{CandidateForm, CandidateListResponse},
    error::{Error, Result},
    routes::form::read_upload_form,
    utils::time,
    AppState,
};

fn not_found(id: i32) -> Error {
    Error::NotFound(format!("Candidate {} not found", id))
}

#[axum::debug_handler]
pub async fn list_candidates(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.candidate_service.find_all().await?;
    Ok(Json(CandidateListResponse { items }))
}

#[axum::debug_handler]
pub async fn get_candidate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let candidate = state
        .candidate_service
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(candidate))
}

#[axum::debug_handler]
pub async fn create_candidate(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let upload = read_upload_form(multipart).await?;
    let form = CandidateForm::from_fields(&upload.fields)?;
    form.validate()?;
    let file = upload
        .file
        .ok_or_else(|| Error::BadRequest("Attachment is required".into()))?;

    let candidate = state
        .candidate_service
        .save_with_attachment(form.into_candidate(0, time::now()), file)
        .await?;
    Ok((StatusCode::CREATED, Json(candidate)))
}

/// Without a new attachment the form must name the current `file_id`.
#[axum::debug_handler]
pub async fn update_candidate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> Result<impl IntoResponse> {
    let upload = read_upload_form(multipart).await?;
    let form = CandidateForm::from_fields(&upload.fields)?;
    form.validate()?;
    if form.creation_date.is_none() {
        return Err(Error::BadRequest("Missing form field: creation_date".into()));
    }

    let updated = match upload.file {
        Some(file) => {
            state
                .candidate_service
                .update_with_attachment(form.into_candidate(id, time::now()), file)
                .await?
        }
        None => {
            if form.file_id.is_none() {
                return Err(Error::BadRequest(
                    "Either an attachment or file_id is required".into(),
                ));
            }
            state
                .candidate_service
                .update(form.into_candidate(id, time::now()))
                .await?
        }
    };
    if !updated {
        return Err(not_found(id));
    }

    let candidate = state
        .candidate_service
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(candidate))
}

#[axum::debug_handler]
pub async fn delete_candidate(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    if !state.candidate_service.delete_by_id(id).await? {
        return Err(not_found(id));
    }
    Ok(StatusCode::NO_CONTENT)
}
