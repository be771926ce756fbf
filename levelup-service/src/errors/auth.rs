use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

use crate::domain::TokenError;

use super::error_response;

/// Failures of bearer/refresh token handling at the HTTP boundary.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Token not provided")]
    MissingToken,

    #[error("Invalid token provided")]
    InvalidToken,

    #[error("Token has expired")]
    ExpiredToken,

    #[error("Token has been revoked")]
    RevokedToken,

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl From<TokenError> for AuthError {
    fn from(e: TokenError) -> Self {
        match e {
            TokenError::Invalid | TokenError::InvalidSubject => AuthError::InvalidToken,
            TokenError::Expired => AuthError::ExpiredToken,
            TokenError::Revoked => AuthError::RevokedToken,
            TokenError::Internal(reason) => {
                tracing::error!(%reason, "token service failure");
                AuthError::InternalServerError
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            AuthError::MissingToken
            | AuthError::InvalidToken
            | AuthError::ExpiredToken
            | AuthError::RevokedToken => StatusCode::UNAUTHORIZED,
            AuthError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error_response(status, self.to_string())
    }
}
