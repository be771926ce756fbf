use axum::extract::State;
use axum::{http::StatusCode, response::IntoResponse, Json};
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::domain::{AuthResponse, Email, Password, SignupRequestBody, UserSummary};
use crate::errors::SignupError;
use crate::services::AuthService;
use crate::utils::add_session_cookies;

pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<SignupRequestBody>,
) -> Result<(CookieJar, impl IntoResponse), SignupError> {
    let email = Email::parse(request.email).or(Err(SignupError::InvalidEmail))?;
    let password = Password::parse(request.password).or(Err(SignupError::InvalidPassword))?;

    let user = AuthService::signup(&state, email, password).await?;

    let tokens = state
        .token_service
        .issue(&user.id, Some(user.email.as_ref()))
        .map_err(|_| SignupError::InternalServerError)?;
    let jar = add_session_cookies(jar, &state.config, &tokens);

    Ok((
        jar,
        (
            StatusCode::CREATED,
            Json(AuthResponse {
                user: UserSummary {
                    id: user.id,
                    email: Some(user.email.as_ref().to_owned()),
                },
                tokens,
            }),
        ),
    ))
}
