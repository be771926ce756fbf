use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TokenError {
    #[error("invalid token")]
    Invalid,

    #[error("token has expired")]
    Expired,

    #[error("token has been revoked")]
    Revoked,

    #[error("subject identifier must not be empty")]
    InvalidSubject,

    #[error("token service failure: {0}")]
    Internal(String),
}
