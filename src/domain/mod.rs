//! Domain layer containing business entities, error kinds and store contracts.
//!
//! The domain layer has no dependencies on the HTTP or persistence layers.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`errors`] - Tagged failure kinds returned by the services
//! - [`repositories`] - Data access trait definitions
//!
//! Business logic is encapsulated in services (see [`crate::application::services`]).

pub mod entities;
pub mod errors;
pub mod repositories;
