use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};

use crate::app_state::AppState;
use crate::domain::{AuthenticatedUser, NewSkill};
use crate::errors::ApiError;
use crate::services::ProgressService;

pub async fn list_skills(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<impl IntoResponse, ApiError> {
    let skills = ProgressService::list_skills(&state, user.user_id()).await?;
    Ok(Json(skills))
}

pub async fn create_skill(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<NewSkill>,
) -> Result<impl IntoResponse, ApiError> {
    let skill = ProgressService::create_skill(&state, user.user_id(), request).await?;
    Ok((StatusCode::CREATED, Json(skill)))
}
