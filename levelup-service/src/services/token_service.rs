//! Token issuance, verification and refresh.
//!
//! `TokenService` signs HS256 JWTs with the shared secret from `Config`:
//! - `issue` mints an access + refresh pair for a subject
//! - `verify` checks signature and expiry and returns the embedded claims
//! - `refresh` exchanges a refresh token for a brand new pair
//!
//! Verification is a pure function of token, secret and clock. The optional
//! revoked-token store adds two stateful checks on top: a rotated refresh token
//! cannot be exchanged twice, and access tokens revoked at logout stop
//! verifying. Without the store the service is fully stateless and rotation
//! leaves old tokens valid until they expire.
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::app_state::RevokedTokenStoreType;
use crate::domain::{IdentityClaims, RevokedTokenStoreErr, TokenError, TokenKind, TokenPair};
use crate::services::HashmapRevokedTokenStore;
use crate::utils::{Config, ConfigError};

const ALGORITHM: Algorithm = Algorithm::HS256;

#[derive(Clone)]
pub struct TokenService {
    cfg: Arc<Config>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    revoked: Option<RevokedTokenStoreType>,
}

impl TokenService {
    /// Build a service from config. An in-memory revoked-token store is
    /// attached when `Config::revocation_enabled` is set.
    pub fn new(cfg: Arc<Config>) -> Result<Self, ConfigError> {
        let revoked = cfg.revocation_enabled().then(|| {
            Arc::new(RwLock::new(HashmapRevokedTokenStore::default())) as RevokedTokenStoreType
        });
        Self::with_revoked_store(cfg, revoked)
    }

    /// Build a service with an explicit revoked-token store, or none for the
    /// stateless mode.
    pub fn with_revoked_store(
        cfg: Arc<Config>,
        revoked: Option<RevokedTokenStoreType>,
    ) -> Result<Self, ConfigError> {
        let (encoding_key, decoding_key) = {
            let secret = cfg.jwt_secret().as_bytes();
            if secret.is_empty() {
                return Err(ConfigError::Missing("JWT_SECRET"));
            }
            (
                EncodingKey::from_secret(secret),
                DecodingKey::from_secret(secret),
            )
        };
        Ok(Self {
            cfg,
            encoding_key,
            decoding_key,
            revoked,
        })
    }

    pub fn revocation_enabled(&self) -> bool {
        self.revoked.is_some()
    }

    pub fn issue(&self, subject: &str, email: Option<&str>) -> Result<TokenPair, TokenError> {
        self.issue_at(subject, email, Utc::now())
    }

    /// Mint an access + refresh pair as of `now`.
    pub fn issue_at(
        &self,
        subject: &str,
        email: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<TokenPair, TokenError> {
        if subject.trim().is_empty() {
            return Err(TokenError::InvalidSubject);
        }

        let access_token = self.mint(
            subject,
            email,
            TokenKind::Access,
            now,
            self.cfg.token_ttl_seconds(),
        )?;
        let refresh_token = self.mint(
            subject,
            email,
            TokenKind::Refresh,
            now,
            self.cfg.refresh_token_ttl_seconds(),
        )?;

        tracing::debug!(subject, "issued token pair");
        Ok(TokenPair {
            access_token,
            refresh_token,
        })
    }

    fn mint(
        &self,
        subject: &str,
        email: Option<&str>,
        kind: TokenKind,
        now: DateTime<Utc>,
        ttl_seconds: i64,
    ) -> Result<String, TokenError> {
        let exp = Duration::try_seconds(ttl_seconds)
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or_else(|| TokenError::Internal("token expiry out of range".to_owned()))?;

        let claims = IdentityClaims {
            sub: subject.to_owned(),
            email: email.map(str::to_owned),
            kind,
            iat: now.timestamp(),
            exp: exp.timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::new(ALGORITHM), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Internal(e.to_string()))
    }

    pub fn verify(&self, token: &str) -> Result<IdentityClaims, TokenError> {
        self.verify_at(token, Utc::now())
    }

    /// Check signature and payload shape, then expiry against `now`.
    ///
    /// A token is valid up to and including its `exp` second.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> Result<IdentityClaims, TokenError> {
        let mut validation = Validation::new(ALGORITHM);
        // Expiry is checked below against the caller's clock.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        let claims = decode::<IdentityClaims>(token, &self.decoding_key, &validation)
            .map_err(|_| TokenError::Invalid)?
            .claims;

        if now.timestamp() > claims.exp {
            return Err(TokenError::Expired);
        }
        Ok(claims)
    }

    /// `verify` plus the revoked-token check, for tokens of either kind.
    pub async fn verify_current(&self, token: &str) -> Result<IdentityClaims, TokenError> {
        let claims = self.verify(token)?;
        if let Some(store) = &self.revoked {
            if store.read().await.is_revoked(&claims.jti).await {
                return Err(TokenError::Revoked);
            }
        }
        Ok(claims)
    }

    /// Verify a bearer token: must be an access token that has not been revoked.
    pub async fn verify_access(&self, token: &str) -> Result<IdentityClaims, TokenError> {
        let claims = self.verify_current(token).await?;
        if !claims.is_kind(TokenKind::Access) {
            return Err(TokenError::Invalid);
        }
        Ok(claims)
    }

    pub async fn refresh(&self, presented_refresh: &str) -> Result<TokenPair, TokenError> {
        self.refresh_at(presented_refresh, Utc::now()).await
    }

    /// Exchange a refresh token for a new pair carrying the same subject and email.
    ///
    /// With a revoked-token store the presented token is consumed: presenting
    /// it a second time fails with `TokenError::Revoked`.
    pub async fn refresh_at(
        &self,
        presented_refresh: &str,
        now: DateTime<Utc>,
    ) -> Result<TokenPair, TokenError> {
        let claims = self.verify_at(presented_refresh, now)?;
        if !claims.is_kind(TokenKind::Refresh) {
            return Err(TokenError::Invalid);
        }

        if let Some(store) = &self.revoked {
            // Recording the id is the check: only one caller can insert it.
            let result = store.write().await.revoke(&claims.jti, claims.exp).await;
            match result {
                Ok(()) => {}
                Err(RevokedTokenStoreErr::AlreadyRevoked) => {
                    tracing::warn!(subject = %claims.sub, "refresh token presented twice");
                    return Err(TokenError::Revoked);
                }
                Err(RevokedTokenStoreErr::UnexpectedError) => {
                    return Err(TokenError::Internal("revoked token store failure".to_owned()));
                }
            }
        }

        self.issue_at(&claims.sub, claims.email.as_deref(), now)
    }

    /// Revoke a single token. Idempotent; a no-op in stateless mode.
    pub async fn revoke(&self, claims: &IdentityClaims) -> Result<(), TokenError> {
        let Some(store) = &self.revoked else {
            return Ok(());
        };
        match store.write().await.revoke(&claims.jti, claims.exp).await {
            Ok(()) | Err(RevokedTokenStoreErr::AlreadyRevoked) => Ok(()),
            Err(RevokedTokenStoreErr::UnexpectedError) => {
                Err(TokenError::Internal("revoked token store failure".to_owned()))
            }
        }
    }

    /// Forget revoked ids whose tokens have expired by now.
    pub async fn purge_revoked(&self) -> usize {
        match &self.revoked {
            Some(store) => store.write().await.purge_expired(Utc::now().timestamp()).await,
            None => 0,
        }
    }
}
