//! Repository implementations.
//!
//! Concrete implementations of the domain repository traits.
//!
//! # Repositories
//!
//! - [`PgUserRepository`], [`PgLinkRepository`] - PostgreSQL via SQLx
//! - [`InMemoryUserRepository`], [`InMemoryLinkRepository`] - process-local store

pub mod memory;
pub mod pg_link_repository;
pub mod pg_user_repository;

pub use memory::{InMemoryLinkRepository, InMemoryUserRepository};
pub use pg_link_repository::PgLinkRepository;
pub use pg_user_repository::PgUserRepository;
