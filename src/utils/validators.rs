//! Field validators for user and link input.
//!
//! Pure predicates over raw strings. They never panic and never touch the
//! store; callers are expected to normalize input (trim, lowercase) first
//! where the field requires it.

use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

/// Maximum accepted email length, in characters.
pub const EMAIL_MAX_LENGTH: usize = 200;

/// Accepted username length range, in characters.
pub const USERNAME_MIN_LENGTH: usize = 3;
pub const USERNAME_MAX_LENGTH: usize = 30;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static USERNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]+$").unwrap());

/// Bare domain with a 2+ letter TLD and an optional path; no scheme.
static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,}(?:/[^\s]*)?$").unwrap()
});

/// Returns `true` if `email` looks like `local@domain.tld` and is at most
/// [`EMAIL_MAX_LENGTH`] characters long.
///
/// # Examples
///
/// ```
/// use linkbio::utils::validators::validate_email;
///
/// assert!(validate_email("a@b.co"));
/// assert!(!validate_email("a@b"));
/// ```
pub fn validate_email(email: &str) -> bool {
    if email.chars().count() > EMAIL_MAX_LENGTH {
        return false;
    }

    EMAIL_REGEX.is_match(email)
}

/// Returns `true` if `username` is 3-30 characters of `[a-zA-Z0-9_]`.
///
/// # Examples
///
/// ```
/// use linkbio::utils::validators::validate_username;
///
/// assert!(validate_username("User_123"));
/// assert!(!validate_username("bad name"));
/// ```
pub fn validate_username(username: &str) -> bool {
    let length = username.chars().count();
    if !(USERNAME_MIN_LENGTH..=USERNAME_MAX_LENGTH).contains(&length) {
        return false;
    }

    USERNAME_REGEX.is_match(username)
}

/// Returns `true` if the trimmed `url` is a bare domain with an optional path
/// (e.g. `example.com/path`). Schemes such as `https://` are not accepted.
pub fn validate_url(url: &str) -> bool {
    URL_REGEX.is_match(url.trim())
}

/// `validator` adapter for [`validate_url`], used by link request DTOs.
pub fn url_rule(url: &str) -> Result<(), ValidationError> {
    if validate_url(url) {
        Ok(())
    } else {
        Err(ValidationError::new("url"))
    }
}
