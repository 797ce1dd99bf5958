//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Link, LinkPatch, NewLink};
use crate::domain::repositories::{LinkRepository, StoreError};

/// PostgreSQL repository for users' links.
///
/// `link_id` is generated by the database (random UUID rendered as text).
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn find_by_owner(&self, owner: &str) -> Result<Vec<Link>, StoreError> {
        let links = sqlx::query_as::<_, Link>(
            r#"
            SELECT link_id, display_text, url, owner, created_at
            FROM links
            WHERE owner = $1
            ORDER BY created_at ASC
            "#,
        )
        .bind(owner)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(links)
    }

    async fn insert(&self, new_link: NewLink) -> Result<Link, StoreError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            INSERT INTO links (display_text, url, owner)
            VALUES ($1, $2, $3)
            RETURNING link_id, display_text, url, owner, created_at
            "#,
        )
        .bind(&new_link.display_text)
        .bind(&new_link.url)
        .bind(&new_link.owner)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn update(&self, link_id: &str, patch: LinkPatch) -> Result<Option<Link>, StoreError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            UPDATE links
            SET display_text = COALESCE($2, display_text),
                url          = COALESCE($3, url)
            WHERE link_id = $1
            RETURNING link_id, display_text, url, owner, created_at
            "#,
        )
        .bind(link_id)
        .bind(patch.display_text)
        .bind(patch.url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn delete(&self, link_id: &str) -> Result<Option<Link>, StoreError> {
        let link = sqlx::query_as::<_, Link>(
            r#"
            DELETE FROM links
            WHERE link_id = $1
            RETURNING link_id, display_text, url, owner, created_at
            "#,
        )
        .bind(link_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(link)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
