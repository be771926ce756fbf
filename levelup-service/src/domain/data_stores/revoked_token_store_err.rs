#[derive(Debug, PartialEq)]
pub enum RevokedTokenStoreErr {
    AlreadyRevoked,
    UnexpectedError,
}
