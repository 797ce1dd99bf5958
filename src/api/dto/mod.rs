//! Data Transfer Objects for API requests and responses.
//!
//! Request DTOs keep every field optional so that absent values reach the
//! handler, which reports them in a fixed order ("Missing values" before any
//! format error). Response DTOs decouple the wire format from the entities.

pub mod health;
pub mod link;
pub mod user;

/// Trims `value` and returns it unless it is empty.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Trims and lowercases `value` and returns it unless it is empty.
pub(crate) fn normalized(value: Option<&str>) -> Option<String> {
    non_empty(value).map(str::to_lowercase)
}
