use axum::extract::State;
use axum::http::HeaderMap;
use axum::{http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::domain::{LogoutRequestBody, MessageResponse, TokenKind};
use crate::errors::AuthError;
use crate::middleware::session_token;
use crate::utils::clear_session_cookies;

pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
    jar: CookieJar,
    body: Option<Json<LogoutRequestBody>>,
) -> Result<(CookieJar, impl IntoResponse), AuthError> {
    let token = session_token(&headers, state.config.access_cookie_name())?;
    let claims = state.token_service.verify_access(&token).await?;
    state.token_service.revoke(&claims).await?;

    // The refresh token is optional; only revoke it if it belongs to the same subject.
    let refresh = body
        .and_then(|Json(body)| body.refresh_token)
        .or_else(|| {
            jar.get(state.config.refresh_cookie_name())
                .map(|c| c.value().to_owned())
        });
    if let Some(refresh) = refresh {
        match state.token_service.verify(&refresh) {
            Ok(rc) if rc.is_kind(TokenKind::Refresh) && rc.sub == claims.sub => {
                state.token_service.revoke(&rc).await?;
            }
            _ => tracing::debug!(subject = %claims.sub, "ignoring unusable refresh token at logout"),
        }
    }

    let jar = clear_session_cookies(jar, &state.config);

    Ok((
        jar,
        (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Logged out successfully".to_string(),
            }),
        ),
    ))
}
