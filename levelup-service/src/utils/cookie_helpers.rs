use axum_extra::extract::cookie::{Cookie, SameSite};
use axum_extra::extract::CookieJar;
use time::Duration;

use super::consts::REFRESH_COOKIE_PATH;
use super::Config;
use crate::domain::TokenPair;

pub fn access_cookie(name: &str, token: &str, ttl_secs: i64) -> Cookie<'static> {
    Cookie::build((name.to_string(), token.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(true)
        .max_age(Duration::seconds(ttl_secs))
        .build()
}

pub fn refresh_cookie(name: &str, token: &str, ttl_secs: i64) -> Cookie<'static> {
    Cookie::build((name.to_string(), token.to_string()))
        .path(REFRESH_COOKIE_PATH)
        .http_only(true)
        .same_site(SameSite::Strict)
        .secure(true)
        .max_age(Duration::seconds(ttl_secs))
        .build()
}

pub fn clear_cookie(name: &str, path: &str) -> Cookie<'static> {
    Cookie::build((name.to_owned(), String::new()))
        .path(path.to_owned())
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(true)
        .max_age(Duration::seconds(0))
        .build()
}

/// Set both session cookies for a freshly issued pair.
pub fn add_session_cookies(jar: CookieJar, config: &Config, tokens: &TokenPair) -> CookieJar {
    jar.add(access_cookie(
        config.access_cookie_name(),
        &tokens.access_token,
        config.token_ttl_seconds(),
    ))
    .add(refresh_cookie(
        config.refresh_cookie_name(),
        &tokens.refresh_token,
        config.refresh_token_ttl_seconds(),
    ))
}

pub fn clear_session_cookies(jar: CookieJar, config: &Config) -> CookieJar {
    jar.add(clear_cookie(config.access_cookie_name(), "/"))
        .add(clear_cookie(config.refresh_cookie_name(), REFRESH_COOKIE_PATH))
}
