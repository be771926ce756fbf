use crate::utils::DEMO_USER_ID;

use super::IdentityClaims;

/// Identity attached to a request by the auth middleware.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub claims: IdentityClaims,
}

impl AuthenticatedUser {
    pub fn new(claims: IdentityClaims) -> Self {
        Self { claims }
    }

    pub fn user_id(&self) -> &str {
        &self.claims.sub
    }

    pub fn is_demo(&self) -> bool {
        is_demo_subject(&self.claims.sub)
    }
}

pub fn is_demo_subject(subject: &str) -> bool {
    subject == DEMO_USER_ID
}
