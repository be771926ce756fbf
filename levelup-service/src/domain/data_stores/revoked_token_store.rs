use super::RevokedTokenStoreErr;

/// Denylist of token ids (`jti`). Entries remember the token's own expiry so
/// they can be dropped once the token could no longer verify anyway.
#[async_trait::async_trait]
pub trait RevokedTokenStore: Send + Sync {
    /// Fails with `AlreadyRevoked` if the id is already present.
    async fn revoke(&mut self, jti: &str, expires_at: i64) -> Result<(), RevokedTokenStoreErr>;
    async fn is_revoked(&self, jti: &str) -> bool;
    /// Drop entries whose token expired before `now`. Returns how many were removed.
    async fn purge_expired(&mut self, now: i64) -> usize;
}
