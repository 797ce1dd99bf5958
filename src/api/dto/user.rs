//! DTOs for user endpoints.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::User;

/// Request body for `POST /api/user/email-available`.
#[derive(Debug, Deserialize)]
pub struct EmailAvailabilityRequest {
    pub email: Option<String>,
}

/// Request body for `POST /api/user/username-available`.
#[derive(Debug, Deserialize)]
pub struct UsernameAvailabilityRequest {
    pub username: Option<String>,
}

/// Request body for `POST /api/user/create`.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: Option<String>,
    pub username: Option<String>,
}

/// Request body for `DELETE /api/user/remove`.
///
/// `id` is kept as raw JSON so that a string such as `"5"` can be told apart
/// from the number `5` and rejected.
#[derive(Debug, Deserialize)]
pub struct RemoveUserRequest {
    #[serde(default)]
    pub id: Value,
}

impl RemoveUserRequest {
    /// Returns the id if it is a non-zero JSON integer.
    pub fn user_id(&self) -> Option<i64> {
        self.id.as_i64().filter(|id| *id != 0)
    }
}

/// Response carrying a single human-readable message.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Public representation of a user.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub email: String,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
        }
    }
}

/// Response for `DELETE /api/user/remove`.
#[derive(Debug, Serialize)]
pub struct RemoveUserResponse {
    pub message: &'static str,
    pub user: UserResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(body: Value) -> RemoveUserRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_remove_user_id_accepts_integers() {
        assert_eq!(parse(json!({ "id": 5 })).user_id(), Some(5));
        assert_eq!(parse(json!({ "id": -3 })).user_id(), Some(-3));
    }

    #[test]
    fn test_remove_user_id_rejects_other_shapes() {
        assert_eq!(parse(json!({ "id": "5" })).user_id(), None);
        assert_eq!(parse(json!({ "id": 0 })).user_id(), None);
        assert_eq!(parse(json!({ "id": 5.5 })).user_id(), None);
        assert_eq!(parse(json!({ "id": true })).user_id(), None);
        assert_eq!(parse(json!({ "id": null })).user_id(), None);
        assert_eq!(parse(json!({})).user_id(), None);
    }

    #[test]
    fn test_user_response_hides_created_at() {
        let user = User::new(
            1,
            "a@x.com".to_string(),
            "alice".to_string(),
            chrono::Utc::now(),
        );

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(json, json!({ "id": 1, "email": "a@x.com", "username": "alice" }));
    }
}
