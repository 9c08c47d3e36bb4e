//! Shared string formats used across content schemas

use regex::Regex;
use std::sync::OnceLock;

/// Lowercase alphanumeric segments joined by single hyphens, e.g. `10u-cook`
pub const SLUG_PATTERN: &str = r"^[a-z0-9]+(-[a-z0-9]+)*$";

/// Free text, a space, then a four digit year, e.g. `Spring 2026`
pub const SEASON_PATTERN: &str = r"^.+\s\d{4}$";

/// Digits, spaces, parentheses, plus and hyphen only (empty allowed)
pub const PHONE_PATTERN: &str = r"^[\d\s()+-]*$";

// No look-around in `regex`; leading dots and `..` are rejected separately.
const EMAIL_PATTERN: &str = r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$";

static SLUG: OnceLock<Regex> = OnceLock::new();
static SEASON: OnceLock<Regex> = OnceLock::new();
static PHONE: OnceLock<Regex> = OnceLock::new();
static EMAIL: OnceLock<Regex> = OnceLock::new();

pub fn slug() -> &'static Regex {
    SLUG.get_or_init(|| Regex::new(SLUG_PATTERN).expect("slug pattern compiles"))
}

pub fn season() -> &'static Regex {
    SEASON.get_or_init(|| Regex::new(SEASON_PATTERN).expect("season pattern compiles"))
}

pub fn phone() -> &'static Regex {
    PHONE.get_or_init(|| Regex::new(PHONE_PATTERN).expect("phone pattern compiles"))
}

fn email_regex() -> &'static Regex {
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Absolute URL with a scheme
pub fn is_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}

pub fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && email_regex().is_match(value)
}
