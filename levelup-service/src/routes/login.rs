use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use axum_extra::extract::CookieJar;

use crate::app_state::AppState;
use crate::domain::{AuthResponse, Email, LoginRequestBody, Password, UserSummary};
use crate::errors::LoginError;
use crate::services::AuthService;
use crate::utils::add_session_cookies;

pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<LoginRequestBody>,
) -> Result<(CookieJar, impl IntoResponse), LoginError> {
    let email = Email::parse(request.email).or(Err(LoginError::InvalidEmail))?;
    let password = Password::parse(request.password).or(Err(LoginError::InvalidPassword))?;
    let user = AuthService::login(&state, email, password).await?;

    let tokens = state
        .token_service
        .issue(&user.id, Some(user.email.as_ref()))
        .map_err(|_| LoginError::InternalServerError)?;
    let jar = add_session_cookies(jar, &state.config, &tokens);

    Ok((
        jar,
        (
            StatusCode::OK,
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
