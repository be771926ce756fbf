use std::collections::HashMap;

use crate::domain::data_stores::{RevokedTokenStore, RevokedTokenStoreErr};

#[derive(Default)]
pub struct HashmapRevokedTokenStore {
    // jti -> exp of the revoked token
    store: HashMap<String, i64>,
}

#[async_trait::async_trait]
impl RevokedTokenStore for HashmapRevokedTokenStore {
    async fn revoke(&mut self, jti: &str, expires_at: i64) -> Result<(), RevokedTokenStoreErr> {
        if self.store.contains_key(jti) {
            Err(RevokedTokenStoreErr::AlreadyRevoked)
        } else {
            self.store.insert(jti.to_owned(), expires_at);
            Ok(())
        }
    }

    async fn is_revoked(&self, jti: &str) -> bool {
        self.store.contains_key(jti)
    }

    async fn purge_expired(&mut self, now: i64) -> usize {
        let before = self.store.len();
        self.store.retain(|_, exp| *exp >= now);
        before - self.store.len()
    }
}
