use axum::extract::State;
use axum::response::IntoResponse;
use axum::{Extension, Json};

use crate::app_state::AppState;
use crate::domain::AuthenticatedUser;
use crate::errors::ApiError;
use crate::services::ProgressService;

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<impl IntoResponse, ApiError> {
    let profile = ProgressService::profile(&state, user.user_id()).await?;
    Ok(Json(profile))
}
