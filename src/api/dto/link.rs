//! DTOs for link endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::non_empty;
use crate::domain::entities::{Link, LinkPatch, NewLink};
use crate::utils::validators::url_rule;

/// Request body for `POST /api/link`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    pub display_text: Option<String>,

    #[validate(custom(function = "url_rule", message = "URL is not valid"))]
    pub url: Option<String>,

    pub owner: Option<String>,
}

impl CreateLinkRequest {
    /// Returns true if any field is absent or blank.
    pub fn has_missing_fields(&self) -> bool {
        [&self.display_text, &self.url, &self.owner]
            .into_iter()
            .any(|field| non_empty(field.as_deref()).is_none())
    }

    /// Converts the request into a [`NewLink`], storing values as sent.
    ///
    /// Call after [`Self::has_missing_fields`]; absent fields become empty
    /// strings.
    pub fn into_new_link(self) -> NewLink {
        NewLink {
            display_text: self.display_text.unwrap_or_default(),
            url: self.url.unwrap_or_default(),
            owner: self.owner.unwrap_or_default(),
        }
    }
}

/// Request body for `PUT /api/link/{linkId}`.
///
/// Both fields are optional; at least one must be a non-empty string.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLinkRequest {
    pub display_text: Option<String>,

    #[validate(custom(function = "url_rule", message = "URL is not valid"))]
    pub url: Option<String>,
}

impl UpdateLinkRequest {
    /// Drops blank fields so that `""` counts as "not supplied".
    pub fn without_blank_fields(self) -> Self {
        let keep = |value: &String| non_empty(Some(value.as_str())).is_some();
        Self {
            display_text: self.display_text.filter(keep),
            url: self.url.filter(keep),
        }
    }
}

impl From<UpdateLinkRequest> for LinkPatch {
    fn from(request: UpdateLinkRequest) -> Self {
        Self {
            display_text: request.display_text,
            url: request.url,
        }
    }
}

/// Public representation of a link.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    #[serde(rename = "linkId")]
    pub link_id: String,
    pub display_text: String,
    pub url: String,
    pub owner: String,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            link_id: link.link_id,
            display_text: link.display_text,
            url: link.url,
            owner: link.owner,
        }
    }
}

/// Response for `DELETE /api/link/{linkId}`.
#[derive(Debug, Serialize)]
pub struct DeleteLinkResponse {
    pub message: &'static str,
    pub link: LinkResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_link_response_uses_link_id_key() {
        let link = Link::new(
            "abc".to_string(),
            "Blog".to_string(),
            "blog.example.com".to_string(),
            "alice".to_string(),
            Utc::now(),
        );

        let json = serde_json::to_value(LinkResponse::from(link)).unwrap();

        assert_eq!(json["linkId"], "abc");
        assert_eq!(json["display_text"], "Blog");
        assert!(json.get("created_at").is_none());
    }

    #[test]
    fn test_create_request_missing_fields() {
        let request = CreateLinkRequest {
            display_text: Some("Blog".to_string()),
            url: Some("  ".to_string()),
            owner: Some("alice".to_string()),
        };
        assert!(request.has_missing_fields());

        let request = CreateLinkRequest {
            display_text: Some("Blog".to_string()),
            url: Some("blog.example.com".to_string()),
            owner: Some("Alice".to_string()),
        };
        assert!(!request.has_missing_fields());

        let new_link = request.into_new_link();
        assert_eq!(new_link.owner, "Alice");
    }

    #[test]
    fn test_update_request_drops_blank_fields() {
        let request = UpdateLinkRequest {
            display_text: Some("".to_string()),
            url: Some("new.example.com".to_string()),
        }
        .without_blank_fields();

        let patch = LinkPatch::from(request);
        assert_eq!(patch.display_text, None);
        assert_eq!(patch.url.as_deref(), Some("new.example.com"));
    }

    #[test]
    fn test_update_request_validates_url_only_when_present() {
        let no_url = UpdateLinkRequest {
            display_text: Some("x".to_string()),
            url: None,
        };
        assert!(no_url.validate().is_ok());

        let bad_url = UpdateLinkRequest {
            display_text: None,
            url: Some("not a url".to_string()),
        };
        let err = bad_url.validate().unwrap_err();
        assert!(err.field_errors().contains_key("url"));
    }
}
