use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::domain::{AuthResponse, UserSummary};
use crate::errors::AuthError;
use crate::utils::{add_session_cookies, DEMO_USER_EMAIL, DEMO_USER_ID};

/// Issue a session for the demo identity. No store is consulted.
pub async fn demo_login(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, impl IntoResponse), AuthError> {
    let tokens = state
        .token_service
        .issue(DEMO_USER_ID, Some(DEMO_USER_EMAIL))?;
    let jar = add_session_cookies(jar, &state.config, &tokens);

    Ok((
        jar,
        (
            StatusCode::OK,
            Json(AuthResponse {
                user: UserSummary {
                    id: DEMO_USER_ID.to_owned(),
                    email: Some(DEMO_USER_EMAIL.to_owned()),
                },
                tokens,
            }),
        ),
    ))
}
