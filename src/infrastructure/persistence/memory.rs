//! Process-local repository implementations.
//!
//! Used when `STORE_BACKEND=memory` (local development and demos) and by the
//! HTTP tests. They honour the same contract as the PostgreSQL repositories,
//! including the unique constraint names on users, but nothing survives a
//! restart.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::{Link, LinkPatch, NewLink, NewUser, User};
use crate::domain::repositories::{
    LinkRepository, StoreError, USERS_EMAIL_KEY, USERS_USERNAME_KEY, UserRepository,
};

#[derive(Default)]
struct UserTable {
    next_id: i64,
    rows: Vec<User>,
}

/// In-memory user store with sequential ids starting at 1.
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: RwLock<UserTable>,
}

impl InMemoryUserRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory user store");
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|u| u.username == username).cloned())
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, StoreError> {
        let mut table = self.table.write().await;

        if table.rows.iter().any(|u| u.email == new_user.email) {
            return Err(StoreError::UniqueViolation {
                constraint: USERS_EMAIL_KEY.to_string(),
            });
        }
        if table.rows.iter().any(|u| u.username == new_user.username) {
            return Err(StoreError::UniqueViolation {
                constraint: USERS_USERNAME_KEY.to_string(),
            });
        }

        table.next_id += 1;
        let user = User::new(table.next_id, new_user.email, new_user.username, Utc::now());
        table.rows.push(user.clone());

        Ok(user)
    }

    async fn delete(&self, id: i64) -> Result<Option<User>, StoreError> {
        let mut table = self.table.write().await;
        let position = table.rows.iter().position(|u| u.id == id);

        Ok(position.map(|idx| table.rows.remove(idx)))
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let table = self.table.read().await;
        Ok(i64::try_from(table.rows.len()).unwrap_or(i64::MAX))
    }
}

/// In-memory link store. Links keep insertion order; ids are random UUIDs.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    rows: RwLock<Vec<Link>>,
}

impl InMemoryLinkRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory link store");
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn find_by_owner(&self, owner: &str) -> Result<Vec<Link>, StoreError> {
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|l| l.owner == owner).cloned().collect())
    }

    async fn insert(&self, new_link: NewLink) -> Result<Link, StoreError> {
        let link = Link::new(
            Uuid::new_v4().to_string(),
            new_link.display_text,
            new_link.url,
            new_link.owner,
            Utc::now(),
        );
        self.rows.write().await.push(link.clone());

        Ok(link)
    }

    async fn update(&self, link_id: &str, patch: LinkPatch) -> Result<Option<Link>, StoreError> {
        let mut rows = self.rows.write().await;

        Ok(rows.iter_mut().find(|l| l.link_id == link_id).map(|link| {
            link.apply(&patch);
            link.clone()
        }))
    }

    async fn delete(&self, link_id: &str) -> Result<Option<Link>, StoreError> {
        let mut rows = self.rows.write().await;
        let position = rows.iter().position(|l| l.link_id == link_id);

        Ok(position.map(|idx| rows.remove(idx)))
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let rows = self.rows.read().await;
        Ok(i64::try_from(rows.len()).unwrap_or(i64::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_link(owner: &str, url: &str) -> NewLink {
        NewLink {
            display_text: "Link".to_string(),
            url: url.to_string(),
            owner: owner.to_string(),
        }
    }

    #[tokio::test]
    async fn test_user_ids_are_sequential() {
        let repo = InMemoryUserRepository::new();

        let first = repo.insert(NewUser::new("a@x.com", "alice")).await.unwrap();
        let second = repo.insert(NewUser::new("b@x.com", "bob")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_user_unique_constraints() {
        let repo = InMemoryUserRepository::new();
        repo.insert(NewUser::new("a@x.com", "alice")).await.unwrap();

        let dup_email = repo.insert(NewUser::new("a@x.com", "other")).await;
        let dup_username = repo.insert(NewUser::new("b@x.com", "alice")).await;

        assert_eq!(
            dup_email.unwrap_err().violated_constraint(),
            Some(USERS_EMAIL_KEY)
        );
        assert_eq!(
            dup_username.unwrap_err().violated_constraint(),
            Some(USERS_USERNAME_KEY)
        );
    }

    #[tokio::test]
    async fn test_user_delete_returns_row() {
        let repo = InMemoryUserRepository::new();
        let user = repo.insert(NewUser::new("a@x.com", "alice")).await.unwrap();

        let deleted = repo.delete(user.id).await.unwrap();
        let again = repo.delete(user.id).await.unwrap();

        assert_eq!(deleted, Some(user));
        assert!(again.is_none());
        assert!(repo.find_by_username("alice").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_links_filtered_by_owner_in_insertion_order() {
        let repo = InMemoryLinkRepository::new();
        let first = repo.insert(new_link("alice", "a.com")).await.unwrap();
        repo.insert(new_link("bob", "b.com")).await.unwrap();
        let third = repo.insert(new_link("alice", "c.com")).await.unwrap();

        let links = repo.find_by_owner("alice").await.unwrap();

        assert_eq!(links, vec![first, third]);
    }

    #[tokio::test]
    async fn test_link_update_and_delete() {
        let repo = InMemoryLinkRepository::new();
        let link = repo.insert(new_link("alice", "a.com")).await.unwrap();

        let updated = repo
            .update(
                &link.link_id,
                LinkPatch {
                    display_text: Some("Home".to_string()),
                    url: None,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.display_text, "Home");
        assert_eq!(updated.url, "a.com");

        assert!(repo.update("missing", LinkPatch::default()).await.unwrap().is_none());

        let deleted = repo.delete(&link.link_id).await.unwrap();
        assert_eq!(deleted, Some(updated));
        assert!(repo.delete(&link.link_id).await.unwrap().is_none());
    }
}
