pub mod env {
    pub const JWT_SECRET: &str = "JWT_SECRET";
    pub const JWT_SECRET_REQUIRED: &str = "JWT_SECRET_REQUIRED";
    pub const ACCESS_TTL_SECONDS: &str = "ACCESS_TTL_SECONDS";
    pub const REFRESH_TTL_SECONDS: &str = "REFRESH_TTL_SECONDS";
    pub const TOKEN_REVOCATION: &str = "TOKEN_REVOCATION";
    pub const ACCESS_COOKIE_NAME: &str = "ACCESS_COOKIE_NAME";
    pub const REFRESH_COOKIE_NAME: &str = "REFRESH_COOKIE_NAME";
    pub const BIND_ADDRESS: &str = "BIND_ADDRESS";
}

// Only used when JWT_SECRET is absent. Anyone who knows this value can mint tokens.
pub const FALLBACK_JWT_SECRET: &str = "level-up-solo-development-secret";

pub const DEFAULT_ACCESS_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;
pub const DEFAULT_REFRESH_TTL_SECONDS: i64 = 30 * 24 * 60 * 60;
// Token lifetimes longer than this are refused at config load.
pub const MAX_TTL_SECONDS: i64 = 10 * 365 * 24 * 60 * 60;

pub const DEFAULT_ACCESS_COOKIE_NAME: &str = "access";
pub const DEFAULT_REFRESH_COOKIE_NAME: &str = "refresh";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

pub const REFRESH_COOKIE_PATH: &str = "/api/auth";

/// Reserved subject that never touches a store.
pub const DEMO_USER_ID: &str = "demo_user";
pub const DEMO_USER_EMAIL: &str = "demo@levelupsolo.net";
