use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use crate::app_state::AppState;
use crate::domain::VerifyTokenResponse;
use crate::errors::AuthError;
use crate::middleware::session_token;

pub async fn verify_token(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AuthError> {
    let token = session_token(&headers, state.config.access_cookie_name())?;
    let claims = state.token_service.verify_current(&token).await?;

    Ok((
        StatusCode::OK,
        Json(VerifyTokenResponse {
            subject_id: claims.sub,
            email: claims.email,
            kind: claims.kind,
        }),
    ))
}
