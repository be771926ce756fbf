use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// User-facing description of the rule enforced by `is_valid_password`.
pub const PASSWORD_POLICY: &str = "password must be at least 8 characters long, contain at least one uppercase letter and one special character.";

static UPPERCASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{Lu}").expect("valid pattern"));
static SPECIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}]").expect("valid pattern"));

pub fn is_valid_password(candidate: &str) -> bool {
    candidate.chars().count() >= MIN_PASSWORD_LENGTH
        && UPPERCASE.is_match(candidate)
        && SPECIAL.is_match(candidate)
}
