//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{LinkService, UserService};
use crate::domain::repositories::{LinkRepository, UserRepository};
use crate::infrastructure::persistence::{InMemoryLinkRepository, InMemoryUserRepository};

/// User service over whichever store backend was configured.
pub type DynUserService = UserService<dyn UserRepository>;

/// Link service over whichever store backend was configured.
pub type DynLinkService = LinkService<dyn LinkRepository>;

/// Services shared by all request handlers.
///
/// Cloning is cheap; requests share the services but no mutable state.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<DynUserService>,
    pub link_service: Arc<DynLinkService>,
}

impl AppState {
    /// Builds the state from repository implementations.
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        link_repository: Arc<dyn LinkRepository>,
    ) -> Self {
        Self {
            user_service: Arc::new(UserService::new(user_repository)),
            link_service: Arc::new(LinkService::new(link_repository)),
        }
    }

    /// Builds the state over fresh in-memory repositories.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryLinkRepository::new()),
        )
    }
}
