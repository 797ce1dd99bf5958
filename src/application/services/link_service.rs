//! Link lifecycle service.

use std::sync::Arc;

use crate::domain::entities::{Link, LinkPatch, NewLink};
use crate::domain::errors::LinkError;
use crate::domain::repositories::LinkRepository;

/// Service for listing, creating, updating and deleting users' links.
///
/// Link content is not deduplicated: the same URL may appear any number of
/// times, for the same or different owners.
pub struct LinkService<R: LinkRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: LinkRepository + ?Sized> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every link owned by `owner`, in store order.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::NoLinksFound`] if the owner has no links.
    /// Returns [`LinkError::QueryFailed`] if the store call fails.
    pub async fn get_links_by_username(&self, owner: &str) -> Result<Vec<Link>, LinkError> {
        let links = self
            .repository
            .find_by_owner(owner)
            .await
            .map_err(LinkError::QueryFailed)?;

        if links.is_empty() {
            return Err(LinkError::NoLinksFound);
        }

        Ok(links)
    }

    /// Creates a link.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::CreateFailed`] if the store call fails.
    pub async fn create_link(&self, new_link: NewLink) -> Result<Link, LinkError> {
        let link = self
            .repository
            .insert(new_link)
            .await
            .map_err(LinkError::CreateFailed)?;

        tracing::info!(link_id = %link.link_id, owner = %link.owner, "link created");

        Ok(link)
    }

    /// Applies a partial update to a link and returns the updated row.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::LinkNotFound`] if no link has this id.
    /// Returns [`LinkError::UpdateFailed`] if the store call fails.
    pub async fn update_link(&self, link_id: &str, patch: LinkPatch) -> Result<Link, LinkError> {
        let link = self
            .repository
            .update(link_id, patch)
            .await
            .map_err(LinkError::UpdateFailed)?
            .ok_or(LinkError::LinkNotFound)?;

        tracing::info!(link_id = %link.link_id, "link updated");

        Ok(link)
    }

    /// Deletes a link and returns the deleted row.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::LinkNotFound`] if no link has this id.
    /// Returns [`LinkError::DeleteFailed`] if the store call fails.
    pub async fn delete_link(&self, link_id: &str) -> Result<Link, LinkError> {
        let link = self
            .repository
            .delete(link_id)
            .await
            .map_err(LinkError::DeleteFailed)?
            .ok_or(LinkError::LinkNotFound)?;

        tracing::info!(link_id = %link.link_id, owner = %link.owner, "link deleted");

        Ok(link)
    }

    /// Counts all links.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::QueryFailed`] if the store call fails.
    pub async fn count_links(&self) -> Result<i64, LinkError> {
        self.repository.count().await.map_err(LinkError::QueryFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockLinkRepository, StoreError};
    use chrono::Utc;

    fn create_test_link(link_id: &str, display_text: &str, url: &str, owner: &str) -> Link {
        Link::new(
            link_id.to_string(),
            display_text.to_string(),
            url.to_string(),
            owner.to_string(),
            Utc::now(),
        )
    }

    fn store_failure() -> StoreError {
        StoreError::Database(sqlx::Error::PoolTimedOut)
    }

    #[tokio::test]
    async fn test_get_links_by_username() {
        let mut mock_repo = MockLinkRepository::new();
        let links = vec![
            create_test_link("l1", "Blog", "blog.example.com", "alice"),
            create_test_link("l2", "Shop", "shop.example.com/alice", "alice"),
        ];
        mock_repo
            .expect_find_by_owner()
            .withf(|owner| owner == "alice")
            .times(1)
            .returning(move |_| Ok(links.clone()));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.get_links_by_username("alice").await.unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].link_id, "l1");
        assert_eq!(result[1].link_id, "l2");
    }

    #[tokio::test]
    async fn test_get_links_empty_is_not_found() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_owner()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.get_links_by_username("alice").await;

        assert!(matches!(result, Err(LinkError::NoLinksFound)));
    }

    #[tokio::test]
    async fn test_get_links_store_failure() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_owner()
            .times(1)
            .returning(|_| Err(store_failure()));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.get_links_by_username("alice").await;

        assert!(matches!(result, Err(LinkError::QueryFailed(_))));
    }

    #[tokio::test]
    async fn test_create_link() {
        let mut mock_repo = MockLinkRepository::new();
        let created = create_test_link("l1", "Blog", "blog.example.com", "alice");
        mock_repo
            .expect_insert()
            .withf(|new_link| new_link.url == "blog.example.com" && new_link.owner == "alice")
            .times(1)
            .returning(move |_| Ok(created.clone()));

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service
            .create_link(NewLink {
                display_text: "Blog".to_string(),
                url: "blog.example.com".to_string(),
                owner: "alice".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(link.link_id, "l1");
    }

    #[tokio::test]
    async fn test_create_link_store_failure() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_insert()
            .times(1)
            .returning(|_| Err(store_failure()));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .create_link(NewLink {
                display_text: "Blog".to_string(),
                url: "blog.example.com".to_string(),
                owner: "alice".to_string(),
            })
            .await;

        assert!(matches!(result, Err(LinkError::CreateFailed(_))));
    }

    #[tokio::test]
    async fn test_update_link_passes_patch_through() {
        let mut mock_repo = MockLinkRepository::new();
        let updated = create_test_link("l1", "Blog", "new.example.com", "alice");
        mock_repo
            .expect_update()
            .withf(|link_id, patch| {
                link_id == "l1"
                    && patch.display_text.is_none()
                    && patch.url.as_deref() == Some("new.example.com")
            })
            .times(1)
            .returning(move |_, _| Ok(Some(updated.clone())));

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service
            .update_link(
                "l1",
                LinkPatch {
                    display_text: None,
                    url: Some("new.example.com".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(link.url, "new.example.com");
    }

    #[tokio::test]
    async fn test_update_link_not_found() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_update()
            .times(1)
            .returning(|_, _| Ok(None));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service
            .update_link(
                "missing",
                LinkPatch {
                    display_text: Some("x".to_string()),
                    url: None,
                },
            )
            .await;

        assert!(matches!(result, Err(LinkError::LinkNotFound)));
    }

    #[tokio::test]
    async fn test_update_link_store_failure() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_update()
            .times(1)
            .returning(|_, _| Err(store_failure()));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.update_link("l1", LinkPatch::default()).await;

        assert!(matches!(result, Err(LinkError::UpdateFailed(_))));
    }

    #[tokio::test]
    async fn test_delete_link() {
        let mut mock_repo = MockLinkRepository::new();
        let deleted = create_test_link("l1", "Blog", "blog.example.com", "alice");
        mock_repo
            .expect_delete()
            .withf(|link_id| link_id == "l1")
            .times(1)
            .returning(move |_| Ok(Some(deleted.clone())));

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service.delete_link("l1").await.unwrap();

        assert_eq!(link.owner, "alice");
    }

    #[tokio::test]
    async fn test_delete_link_not_found() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_delete().times(1).returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.delete_link("missing").await;

        assert!(matches!(result, Err(LinkError::LinkNotFound)));
    }

    #[tokio::test]
    async fn test_delete_link_store_failure() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_delete()
            .times(1)
            .returning(|_| Err(store_failure()));

        let service = LinkService::new(Arc::new(mock_repo));

        let result = service.delete_link("l1").await;

        assert!(matches!(result, Err(LinkError::DeleteFailed(_))));
    }
}
