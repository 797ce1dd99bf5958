//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the remote store behind the Repository pattern.
//! Services receive them as injected dependencies; nothing in the crate
//! reaches the store through a global.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - User account lookups, insert and delete
//! - [`LinkRepository`] - Link CRUD keyed by owner and link id
//!
//! Every call fails with a [`StoreError`].

pub mod link_repository;
pub mod store_error;
pub mod user_repository;

pub use link_repository::LinkRepository;
pub use store_error::StoreError;
pub use user_repository::{USERS_EMAIL_KEY, USERS_USERNAME_KEY, UserRepository};

#[cfg(test)]
pub use link_repository::MockLinkRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
