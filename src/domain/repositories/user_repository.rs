//! Repository trait for user account data access.

use crate::domain::entities::{NewUser, User};
use crate::domain::repositories::StoreError;
use async_trait::async_trait;

/// Name of the unique constraint on `users.email`.
pub const USERS_EMAIL_KEY: &str = "users_email_key";

/// Name of the unique constraint on `users.username`.
pub const USERS_USERNAME_KEY: &str = "users_username_key";

/// Repository interface for managing user accounts.
///
/// Lookups take already-normalized values; normalization is the caller's job.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUserRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryUserRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by email.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on database errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Finds a user by username.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on database errors.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    /// Inserts a new user and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UniqueViolation`] naming [`USERS_EMAIL_KEY`] or
    /// [`USERS_USERNAME_KEY`] if either field is already taken.
    /// Returns [`StoreError::Database`] on other database errors.
    async fn insert(&self, new_user: NewUser) -> Result<User, StoreError>;

    /// Deletes a user by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(User))` with the deleted row
    /// - `Ok(None)` if no user has this id
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on database errors.
    async fn delete(&self, id: i64) -> Result<Option<User>, StoreError>;

    /// Counts all users.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on database errors.
    async fn count(&self) -> Result<i64, StoreError>;
}
