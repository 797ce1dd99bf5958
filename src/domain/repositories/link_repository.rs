//! Repository trait for link data access.

use crate::domain::entities::{Link, LinkPatch, NewLink};
use crate::domain::repositories::StoreError;
use async_trait::async_trait;

/// Repository interface for managing users' links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Lists every link whose owner equals `owner`, in store order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on database errors.
    async fn find_by_owner(&self, owner: &str) -> Result<Vec<Link>, StoreError>;

    /// Inserts a new link. The store assigns `link_id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on database errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, StoreError>;

    /// Partially updates a link.
    ///
    /// Only fields present in [`LinkPatch`] are modified.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` with the updated row
    /// - `Ok(None)` if no link has this id
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on database errors.
    async fn update(&self, link_id: &str, patch: LinkPatch) -> Result<Option<Link>, StoreError>;

    /// Deletes a link by id, returning the deleted row if there was one.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on database errors.
    async fn delete(&self, link_id: &str) -> Result<Option<Link>, StoreError>;

    /// Counts all links.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] on database errors.
    async fn count(&self) -> Result<i64, StoreError>;
}
