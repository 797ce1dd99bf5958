//! Domain error kinds for the user and link lifecycles.
//!
//! Services fail with one of these tagged variants; the HTTP layer matches on
//! the variant (see [`crate::error`]) rather than on message text. Variants
//! caused by a failed store call keep the [`StoreError`] as their source so
//! it can be logged without being shown to clients.

use crate::domain::repositories::StoreError;
use std::fmt;

/// The user field an availability check was about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    Email,
    Username,
}

impl fmt::Display for UserField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email => f.write_str("Email"),
            Self::Username => f.write_str("Username"),
        }
    }
}

/// Failures of the user account lifecycle.
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("Email taken")]
    EmailTaken,

    #[error("Username taken")]
    UsernameTaken,

    #[error("User not found")]
    UserNotFound,

    #[error("{field} availability check failed")]
    AvailabilityCheckFailed {
        field: UserField,
        #[source]
        source: StoreError,
    },

    #[error("Error creating account")]
    CreateFailed(#[source] StoreError),

    #[error("Error fetching user")]
    FetchFailed(#[source] StoreError),

    #[error("Error removing user")]
    DeleteFailed(#[source] StoreError),
}

/// Failures of the link lifecycle.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    #[error("No links found")]
    NoLinksFound,

    #[error("Link not found")]
    LinkNotFound,

    #[error("Error getting links")]
    QueryFailed(#[source] StoreError),

    #[error("Error creating link")]
    CreateFailed(#[source] StoreError),

    #[error("Error updating link")]
    UpdateFailed(#[source] StoreError),

    #[error("Error deleting link")]
    DeleteFailed(#[source] StoreError),
}
