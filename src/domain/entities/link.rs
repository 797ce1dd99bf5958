//! Link entity representing one entry of a user's link list.

use chrono::{DateTime, Utc};

/// A link owned by a user.
///
/// `owner` holds the owning user's username. It is a soft reference: the
/// store does not enforce that the user exists.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Link {
    pub link_id: String,
    pub display_text: String,
    pub url: String,
    pub owner: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        link_id: String,
        display_text: String,
        url: String,
        owner: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            link_id,
            display_text,
            url,
            owner,
            created_at,
        }
    }

    /// Applies a partial update in place. `None` fields are left unchanged.
    pub fn apply(&mut self, patch: &LinkPatch) {
        if let Some(display_text) = &patch.display_text {
            self.display_text.clone_from(display_text);
        }
        if let Some(url) = &patch.url {
            self.url.clone_from(url);
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub display_text: String,
    pub url: String,
    pub owner: String,
}

/// Partial update for an existing link.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkPatch {
    pub display_text: Option<String>,
    pub url: Option<String>,
}

impl LinkPatch {
    /// Returns true if the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        self.display_text.is_none() && self.url.is_none()
    }
}
