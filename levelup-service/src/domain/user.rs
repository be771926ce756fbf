use uuid::Uuid;

use super::email::Email;

#[derive(PartialEq, Debug, Clone)]
pub struct User {
    pub id: String,
    pub email: Email,
    /// Argon2 PHC string.
    pub password_hash: String,
}

impl User {
    pub fn new(email: Email, password_hash: String) -> Self {
        User {
            id: Uuid::new_v4().to_string(),
            email,
            password_hash,
        }
    }
}
