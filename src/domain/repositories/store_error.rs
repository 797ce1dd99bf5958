//! Errors reported by repository implementations.

/// Failure of a single store call.
///
/// Unique constraint violations are kept apart from other failures so the
/// services can turn a lost sign-up race into the matching conflict instead
/// of a generic failure.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("unique constraint `{constraint}` violated")]
    UniqueViolation { constraint: String },

    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

impl StoreError {
    /// Returns the violated constraint name, if this is a unique violation.
    pub fn violated_constraint(&self) -> Option<&str> {
        match self {
            Self::UniqueViolation { constraint } => Some(constraint),
            Self::Database(_) => None,
        }
    }
}
