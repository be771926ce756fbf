use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::domain::RefreshRequestBody;
use crate::errors::AuthError;
use crate::utils::add_session_cookies;

/// Rotate a refresh token. The token is read from the JSON body, falling back
/// to the refresh cookie.
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Option<Json<RefreshRequestBody>>,
) -> Result<(CookieJar, impl IntoResponse), AuthError> {
    let presented = body
        .and_then(|Json(body)| body.refresh_token)
        .filter(|t| !t.trim().is_empty())
        .or_else(|| {
            jar.get(state.config.refresh_cookie_name())
                .map(|c| c.value().to_owned())
        })
        .ok_or(AuthError::MissingToken)?;

    let tokens = state.token_service.refresh(presented.trim()).await?;
    let jar = add_session_cookies(jar, &state.config, &tokens);

    Ok((jar, (StatusCode::OK, Json(tokens))))
}
