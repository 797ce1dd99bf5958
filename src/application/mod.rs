//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls and translate store outcomes into
//! domain error kinds. HTTP handlers and the admin CLI both call into them.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - Availability checks and user lifecycle
//! - [`services::link_service::LinkService`] - Link lifecycle

pub mod services;
