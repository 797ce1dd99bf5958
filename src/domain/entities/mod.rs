//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic beyond small
//! helpers. Creation and update inputs live in separate structs:
//!
//! - [`NewUser`], [`NewLink`] - for creating new records
//! - [`LinkPatch`] - for partial link updates

pub mod link;
pub mod user;

pub use link::{Link, LinkPatch, NewLink};
pub use user::{NewUser, User};
