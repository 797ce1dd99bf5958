//! Helpers shared across layers.
//!
//! - [`validators`] - Email, username and URL format checks
//! - [`db_error`] - Translation of SQLx errors into store errors

pub mod db_error;
pub mod validators;
