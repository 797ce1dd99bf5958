//! Classification of `sqlx` errors into [`StoreError`].

use crate::domain::repositories::StoreError;

/// Returns the violated constraint name if `e` is a unique violation.
pub fn unique_violation_constraint(e: &sqlx::Error) -> Option<String> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    Some(db_err.constraint().unwrap_or_default().to_string())
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        match unique_violation_constraint(&e) {
            Some(constraint) => StoreError::UniqueViolation { constraint },
            None => StoreError::Database(e),
        }
    }
}
