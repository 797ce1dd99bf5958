//! User entity representing a registered account.

use chrono::{DateTime, Utc};

/// A registered account.
///
/// `email` and `username` are stored normalized (trimmed, lowercase) and are
/// unique across all users.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User instance.
    pub fn new(id: i64, email: String, username: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            email,
            username,
            created_at,
        }
    }
}

/// Input data for creating a new user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub username: String,
}

impl NewUser {
    /// Builds sign-up input, normalizing both fields (trim + lowercase).
    pub fn new(email: &str, username: &str) -> Self {
        Self {
            email: normalize(email),
            username: normalize(username),
        }
    }
}

/// Trims and lowercases an email or username.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}
