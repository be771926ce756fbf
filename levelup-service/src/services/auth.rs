use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
};

use crate::app_state::AppState;
use crate::domain::{Email, Password, User, UserStoreError};
use crate::errors::{LoginError, SignupError};
use crate::utils::DEMO_USER_EMAIL;

pub struct AuthService;

impl AuthService {
    pub async fn signup(
        state: &AppState,
        email: Email,
        password: Password,
    ) -> Result<User, SignupError> {
        if email.as_ref() == DEMO_USER_EMAIL {
            return Err(SignupError::UserAlreadyExists(email.as_ref().to_string()));
        }

        let password_hash = hash_password(password.as_ref())
            .await
            .map_err(|_| SignupError::InternalServerError)?;
        let user = User::new(email.clone(), password_hash);

        let result = state.user_store.write().await.add_user(user.clone()).await;
        result.map_err(|e| match e {
            UserStoreError::UserAlreadyExists => {
                SignupError::UserAlreadyExists(email.as_ref().to_string())
            }
            _ => SignupError::InternalServerError,
        })?;

        tracing::info!(user_id = %user.id, "user signed up");
        Ok(user)
    }

    pub async fn login(
        state: &AppState,
        email: Email,
        password: Password,
    ) -> Result<User, LoginError> {
        let lookup = state.user_store.read().await.get_user(&email).await;
        let user = match lookup {
            Ok(user) => user,
            Err(UserStoreError::UserNotFound) => return Err(LoginError::IncorrectCredentials),
            Err(_) => return Err(LoginError::InternalServerError),
        };

        let matches = verify_password(password.as_ref(), &user.password_hash)
            .await
            .map_err(|_| LoginError::InternalServerError)?;
        if !matches {
            tracing::debug!(user_id = %user.id, "login rejected: wrong password");
            return Err(LoginError::IncorrectCredentials);
        }
        Ok(user)
    }
}

#[derive(Debug)]
pub struct PasswordHashError;

// Hashing is CPU bound, keep it off the async workers.
async fn hash_password(password: &str) -> Result<String, PasswordHashError> {
    let password_clone = password.to_owned();
    tokio::task::spawn_blocking(move || {
        let argon2 = Argon2::new(
            Algorithm::Argon2id,
            Version::V0x13,
            Params::new(15000, 2, 1, None).map_err(|_| PasswordHashError)?,
        );
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = argon2
            .hash_password(password_clone.as_bytes(), &salt)
            .map_err(|_| PasswordHashError)?
            .to_string();
        Ok(password_hash)
    })
    .await
    .map_err(|_| PasswordHashError)?
}

async fn verify_password(password: &str, hash: &str) -> Result<bool, PasswordHashError> {
    let password_clone = password.to_owned();
    let hash_clone = hash.to_owned();

    tokio::task::spawn_blocking(move || {
        let parsed_hash = PasswordHash::new(&hash_clone).map_err(|_| PasswordHashError)?;
        let argon2 = Argon2::default();
        Ok(argon2
            .verify_password(password_clone.as_bytes(), &parsed_hash)
            .is_ok())
    })
    .await
    .map_err(|_| PasswordHashError)?
}
