use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use uuid::Uuid;

use crate::app_state::AppState;
use crate::domain::{AuthenticatedUser, GoalUpdate, NewGoal};
use crate::errors::ApiError;
use crate::services::ProgressService;

pub async fn list_goals(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<impl IntoResponse, ApiError> {
    let goals = ProgressService::list_goals(&state, user.user_id()).await?;
    Ok(Json(goals))
}

pub async fn create_goal(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<NewGoal>,
) -> Result<impl IntoResponse, ApiError> {
    let goal = ProgressService::create_goal(&state, user.user_id(), request).await?;
    Ok((StatusCode::CREATED, Json(goal)))
}

pub async fn update_goal(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<GoalUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    let goal = ProgressService::update_goal(&state, user.user_id(), id, request).await?;
    Ok(Json(goal))
}

pub async fn delete_goal(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    ProgressService::delete_goal(&state, user.user_id(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}
