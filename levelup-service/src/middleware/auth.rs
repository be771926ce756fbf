use axum::extract::{Request, State};
use axum::http::{header::AUTHORIZATION, HeaderMap};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::domain::AuthenticatedUser;
use crate::errors::AuthError;

/// Pull the token out of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let auth = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let token = auth
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidToken)?
        .trim();
    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }
    Ok(token)
}

/// The bearer token, or the access cookie when no `Authorization` header is sent.
pub fn session_token(headers: &HeaderMap, cookie_name: &str) -> Result<String, AuthError> {
    match bearer_token(headers) {
        Ok(token) => Ok(token.to_owned()),
        Err(AuthError::MissingToken) if !headers.contains_key(AUTHORIZATION) => {
            CookieJar::from_headers(headers)
                .get(cookie_name)
                .map(|c| c.value().to_owned())
                .filter(|v| !v.is_empty())
                .ok_or(AuthError::MissingToken)
        }
        Err(e) => Err(e),
    }
}

/// Reject requests without a valid access token; attach the identity otherwise.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let token = session_token(req.headers(), state.config.access_cookie_name())?;
    let claims = state.token_service.verify_access(&token).await?;

    req.extensions_mut().insert(AuthenticatedUser::new(claims));
    Ok(next.run(req).await)
}
