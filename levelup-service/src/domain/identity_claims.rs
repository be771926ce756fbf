use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Decoded payload of an access or refresh token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityClaims {
    pub sub: String, // Subject (user ID)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub kind: TokenKind,
    pub iat: i64, // Issued at (unix seconds)
    pub exp: i64, // Expiration time (unix seconds)
    pub jti: String, // Token ID
}

impl IdentityClaims {
    pub fn is_kind(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
