//! HTTP request handlers for API endpoints.
//!
//! Handlers validate input in a fixed order, call one service method and
//! shape the response. Failures are returned as [`crate::error::AppError`].

pub mod health;
pub mod links;
pub mod users;

pub use health::health_handler;
pub use links::{create_link_handler, delete_link_handler, get_links_handler, update_link_handler};
pub use users::{
    check_email_handler, check_username_handler, create_user_handler, get_user_handler,
    remove_user_handler,
};
