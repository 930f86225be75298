use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::user_dto::{CredentialsPayload, RegisterUserPayload, UserResponse},
    error::{Error, Result},
    AppState,
};

#[axum::debug_handler]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterUserPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state
        .user_service
        .register(payload.into())
        .await?
        .ok_or_else(|| Error::Conflict("User with this email already exists".into()))?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

#[axum::debug_handler]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let user = state
        .user_service
        .login(&payload.email, &payload.password)
        .await?
        .ok_or_else(|| Error::Unauthorized("Invalid email or password".into()))?;
    Ok(Json(UserResponse::from(user)))
}

#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    if !state
        .user_service
        .delete(&payload.email, &payload.password)
        .await?
    {
        return Err(Error::NotFound("User not found".into()));
    }
    Ok(StatusCode::NO_CONTENT)
}
