use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Extension, Json};
use uuid::Uuid;

use crate::app_state::AppState;
use crate::domain::{AuthenticatedUser, NewTask, TaskUpdate};
use crate::errors::ApiError;
use crate::services::ProgressService;

pub async fn list_tasks(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<impl IntoResponse, ApiError> {
    let tasks = ProgressService::list_tasks(&state, user.user_id()).await?;
    Ok(Json(tasks))
}

pub async fn create_task(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<NewTask>,
) -> Result<impl IntoResponse, ApiError> {
    let task = ProgressService::create_task(&state, user.user_id(), request).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub async fn update_task(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<TaskUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    let task = ProgressService::update_task(&state, user.user_id(), id, request).await?;
    Ok(Json(task))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    ProgressService::delete_task(&state, user.user_id(), id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn complete_task(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let completion = ProgressService::complete_task(&state, user.user_id(), id).await?;
    Ok(Json(completion))
}
