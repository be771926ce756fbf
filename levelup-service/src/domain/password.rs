use crate::validation::{is_valid_password, PASSWORD_POLICY};

/// A plaintext password that satisfies the account password policy.
#[derive(PartialEq, Debug, Clone)]
pub struct Password(String);

impl Password {
    pub fn parse(candidate: String) -> Result<Password, &'static str> {
        if is_valid_password(&candidate) {
            Ok(Password(candidate))
        } else {
            Err(PASSWORD_POLICY)
        }
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
