use std::env;

use dotenvy::dotenv;
use thiserror::Error;

use super::consts::{
    env as keys, DEFAULT_ACCESS_COOKIE_NAME, DEFAULT_ACCESS_TTL_SECONDS, DEFAULT_BIND_ADDRESS,
    DEFAULT_REFRESH_COOKIE_NAME, DEFAULT_REFRESH_TTL_SECONDS, FALLBACK_JWT_SECRET, MAX_TTL_SECONDS,
};

/// Where the signing secret came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecretSource {
    Environment,
    Fallback,
}

#[derive(Clone)]
pub struct Config {
    jwt_secret: String,
    secret_source: SecretSource,
    access_ttl_seconds: i64,
    refresh_ttl_seconds: i64,
    revocation_enabled: bool,
    access_cookie_name: String,
    refresh_cookie_name: String,
    bind_address: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("jwt_secret", &"<redacted>")
            .field("secret_source", &self.secret_source)
            .field("access_ttl_seconds", &self.access_ttl_seconds)
            .field("refresh_ttl_seconds", &self.refresh_ttl_seconds)
            .field("revocation_enabled", &self.revocation_enabled)
            .field("access_cookie_name", &self.access_cookie_name)
            .field("refresh_cookie_name", &self.refresh_cookie_name)
            .field("bind_address", &self.bind_address)
            .finish()
    }
}

impl Config {
    pub fn jwt_secret(&self) -> &str {
        &self.jwt_secret
    }
    pub fn secret_source(&self) -> SecretSource {
        self.secret_source
    }
    pub fn token_ttl_seconds(&self) -> i64 {
        self.access_ttl_seconds
    }
    pub fn refresh_token_ttl_seconds(&self) -> i64 {
        self.refresh_ttl_seconds
    }
    pub fn revocation_enabled(&self) -> bool {
        self.revocation_enabled
    }
    pub fn access_cookie_name(&self) -> &str {
        &self.access_cookie_name
    }
    pub fn refresh_cookie_name(&self) -> &str {
        &self.refresh_cookie_name
    }
    pub fn bind_address(&self) -> &str {
        &self.bind_address
    }

    /// Build a config around an explicit secret with every other setting at
    /// its default. Used by tests and embedders that don't read the environment.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: secret.into(),
            secret_source: SecretSource::Environment,
            access_ttl_seconds: DEFAULT_ACCESS_TTL_SECONDS,
            refresh_ttl_seconds: DEFAULT_REFRESH_TTL_SECONDS,
            revocation_enabled: true,
            access_cookie_name: DEFAULT_ACCESS_COOKIE_NAME.to_owned(),
            refresh_cookie_name: DEFAULT_REFRESH_COOKIE_NAME.to_owned(),
            bind_address: DEFAULT_BIND_ADDRESS.to_owned(),
        }
    }

    pub fn with_ttls(mut self, access_ttl_seconds: i64, refresh_ttl_seconds: i64) -> Self {
        self.access_ttl_seconds = access_ttl_seconds;
        self.refresh_ttl_seconds = refresh_ttl_seconds;
        self
    }

    pub fn with_revocation(mut self, enabled: bool) -> Self {
        self.revocation_enabled = enabled;
        self
    }

    /// Load from the process environment, reading `.env` first when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env in dev; no-op in prod if not present.
        let _ = dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_required = parse_bool(&lookup, keys::JWT_SECRET_REQUIRED, false)?;

        let (jwt_secret, secret_source) = match lookup(keys::JWT_SECRET) {
            Some(secret) if !secret.trim().is_empty() => (secret, SecretSource::Environment),
            _ if secret_required => return Err(ConfigError::Missing(keys::JWT_SECRET)),
            _ => {
                tracing::warn!(
                    "{} is not set; signing tokens with the built-in development secret",
                    keys::JWT_SECRET
                );
                (FALLBACK_JWT_SECRET.to_owned(), SecretSource::Fallback)
            }
        };

        let access_ttl_seconds =
            parse_ttl(&lookup, keys::ACCESS_TTL_SECONDS, DEFAULT_ACCESS_TTL_SECONDS)?;
        let refresh_ttl_seconds =
            parse_ttl(&lookup, keys::REFRESH_TTL_SECONDS, DEFAULT_REFRESH_TTL_SECONDS)?;
        let revocation_enabled = parse_bool(&lookup, keys::TOKEN_REVOCATION, true)?;

        let access_cookie_name = lookup(keys::ACCESS_COOKIE_NAME)
            .unwrap_or_else(|| DEFAULT_ACCESS_COOKIE_NAME.into());
        let refresh_cookie_name = lookup(keys::REFRESH_COOKIE_NAME)
            .unwrap_or_else(|| DEFAULT_REFRESH_COOKIE_NAME.into());
        let bind_address =
            lookup(keys::BIND_ADDRESS).unwrap_or_else(|| DEFAULT_BIND_ADDRESS.into());

        Ok(Self {
            jwt_secret,
            secret_source,
            access_ttl_seconds,
            refresh_ttl_seconds,
            revocation_enabled,
            access_cookie_name,
            refresh_cookie_name,
            bind_address,
        })
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("missing env var {0}")]
    Missing(&'static str),
    #[error("invalid env var {0}")]
    Invalid(&'static str),
}

fn parse_ttl<F>(lookup: &F, key: &'static str, default: i64) -> Result<i64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(v) => match v.trim().parse::<i64>() {
            Ok(secs) if (1..=MAX_TTL_SECONDS).contains(&secs) => Ok(secs),
            _ => Err(ConfigError::Invalid(key)),
        },
    }
}

fn parse_bool<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some("1") | Some("true") | Some("TRUE") | Some("yes") => Ok(true),
        Some("0") | Some("false") | Some("FALSE") | Some("no") => Ok(false),
        Some(_) => Err(ConfigError::Invalid(key)),
    }
}
