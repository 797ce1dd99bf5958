//! User account lifecycle service.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User, user::normalize};
use crate::domain::errors::{UserError, UserField};
use crate::domain::repositories::{
    StoreError, USERS_EMAIL_KEY, USERS_USERNAME_KEY, UserRepository,
};

/// Service for availability checks, sign-up, lookup and removal of users.
///
/// Every operation re-reads the store; nothing is cached between calls.
pub struct UserService<R: UserRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UserRepository + ?Sized> UserService<R> {
    /// Creates a new user service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns `true` if no user has this email.
    ///
    /// The email is normalized (trim + lowercase) before the lookup.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::AvailabilityCheckFailed`] if the store call fails.
    pub async fn check_email_available(&self, email: &str) -> Result<bool, UserError> {
        let existing = self
            .repository
            .find_by_email(&normalize(email))
            .await
            .map_err(|source| UserError::AvailabilityCheckFailed {
                field: UserField::Email,
                source,
            })?;

        Ok(existing.is_none())
    }

    /// Returns `true` if no user has this username.
    ///
    /// The username is normalized (trim + lowercase) before the lookup.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::AvailabilityCheckFailed`] if the store call fails.
    pub async fn check_username_available(&self, username: &str) -> Result<bool, UserError> {
        let existing = self
            .repository
            .find_by_username(&normalize(username))
            .await
            .map_err(|source| UserError::AvailabilityCheckFailed {
                field: UserField::Username,
                source,
            })?;

        Ok(existing.is_none())
    }

    /// Creates a user account.
    ///
    /// Availability of both fields is re-checked against the store, email
    /// first. The checks and the insert are separate round-trips, so two
    /// concurrent sign-ups can both pass the checks; the loser then trips a
    /// unique constraint, which is reported as the same conflict.
    ///
    /// # Errors
    ///
    /// - [`UserError::EmailTaken`] if the email is already registered
    /// - [`UserError::UsernameTaken`] if the username is already registered
    /// - [`UserError::CreateFailed`] if the insert fails for another reason
    /// - [`UserError::AvailabilityCheckFailed`] if a pre-check fails
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, UserError> {
        let new_user = NewUser::new(&new_user.email, &new_user.username);

        if !self.check_email_available(&new_user.email).await? {
            return Err(UserError::EmailTaken);
        }
        if !self.check_username_available(&new_user.username).await? {
            return Err(UserError::UsernameTaken);
        }

        let user = self
            .repository
            .insert(new_user)
            .await
            .map_err(map_insert_error)?;

        tracing::info!(user_id = user.id, username = %user.username, "user created");

        Ok(user)
    }

    /// Retrieves a user by username.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::UserNotFound`] if no user matches.
    /// Returns [`UserError::FetchFailed`] if the store call fails.
    pub async fn get_user_by_username(&self, username: &str) -> Result<User, UserError> {
        self.repository
            .find_by_username(&normalize(username))
            .await
            .map_err(UserError::FetchFailed)?
            .ok_or(UserError::UserNotFound)
    }

    /// Removes a user by id and returns the deleted row.
    ///
    /// Links owned by the user are left in place.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::UserNotFound`] if no user has this id.
    /// Returns [`UserError::DeleteFailed`] if the store call fails.
    pub async fn remove_user(&self, id: i64) -> Result<User, UserError> {
        let user = self
            .repository
            .delete(id)
            .await
            .map_err(UserError::DeleteFailed)?
            .ok_or(UserError::UserNotFound)?;

        tracing::info!(user_id = user.id, username = %user.username, "user removed");

        Ok(user)
    }

    /// Counts registered users.
    ///
    /// # Errors
    ///
    /// Returns [`UserError::FetchFailed`] if the store call fails.
    pub async fn count_users(&self) -> Result<i64, UserError> {
        self.repository.count().await.map_err(UserError::FetchFailed)
    }
}

/// Maps a failed insert to a conflict when a uniqueness constraint was hit.
fn map_insert_error(err: StoreError) -> UserError {
    match err.violated_constraint() {
        Some(USERS_EMAIL_KEY) => UserError::EmailTaken,
        Some(USERS_USERNAME_KEY) => UserError::UsernameTaken,
        _ => UserError::CreateFailed(err),
    }
}
