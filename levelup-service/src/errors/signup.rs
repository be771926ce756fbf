use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

use super::error_response;
use crate::validation::PASSWORD_POLICY;

#[derive(Error, Debug)]
pub enum SignupError {
    #[error("invalid email address")]
    InvalidEmail,

    #[error("{}", PASSWORD_POLICY)]
    InvalidPassword,

    #[error("User with email {0} already exists.")]
    UserAlreadyExists(String),

    #[error("Something went wrong, please try again later.")]
    InternalServerError,
}

impl IntoResponse for SignupError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            SignupError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
            SignupError::InvalidPassword => StatusCode::UNPROCESSABLE_ENTITY,
            SignupError::UserAlreadyExists(_) => StatusCode::CONFLICT,
            SignupError::InternalServerError => StatusCode::INTERNAL_SERVER_ERROR,
        };

        error_response(status, self.to_string())
    }
}
