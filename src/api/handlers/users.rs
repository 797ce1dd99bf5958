//! Handlers for user account endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;

use crate::api::dto::normalized;
use crate::api::dto::user::{
    CreateUserRequest, EmailAvailabilityRequest, MessageResponse, RemoveUserRequest,
    RemoveUserResponse, UserResponse, UsernameAvailabilityRequest,
};
use crate::api::extract::AppJson;
use crate::domain::entities::NewUser;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::validators::{validate_email, validate_username};

fn bad_request() -> AppError {
    AppError::bad_request("Bad Request", Value::Null)
}

/// Reports whether an email address can still be registered.
///
/// # Endpoint
///
/// `POST /api/user/email-available`
///
/// # Request Body
///
/// ```json
/// { "email": "Alice@Example.com" }
/// ```
///
/// The address is trimmed and lowercased before the lookup.
///
/// # Response
///
/// ```json
/// { "message": "Email available" }
/// ```
///
/// # Errors
///
/// - 400 "Bad Request" if the email is missing or malformed
/// - 409 "Email unavailable" if an account already uses it
/// - 500 "Unable to check Email availability" on store failure
pub async fn check_email_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<EmailAvailabilityRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let email = normalized(payload.email.as_deref())
        .filter(|email| validate_email(email))
        .ok_or_else(bad_request)?;

    if state.user_service.check_email_available(&email).await? {
        Ok(Json(MessageResponse {
            message: "Email available",
        }))
    } else {
        Err(AppError::conflict("Email unavailable", Value::Null))
    }
}

/// Reports whether a username can still be registered.
///
/// # Endpoint
///
/// `POST /api/user/username-available`
///
/// # Errors
///
/// - 400 "Bad Request" if the username is missing or malformed
/// - 409 "Username unavailable" if an account already uses it
/// - 500 "Unable to check Username availability" on store failure
pub async fn check_username_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<UsernameAvailabilityRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let username = normalized(payload.username.as_deref())
        .filter(|username| validate_username(username))
        .ok_or_else(bad_request)?;

    if state.user_service.check_username_available(&username).await? {
        Ok(Json(MessageResponse {
            message: "Username available",
        }))
    } else {
        Err(AppError::conflict("Username unavailable", Value::Null))
    }
}

/// Registers a new account.
///
/// # Endpoint
///
/// `POST /api/user/create`
///
/// # Request Body
///
/// ```json
/// { "email": "alice@example.com", "username": "alice" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "message": "Account created" }
/// ```
///
/// # Errors
///
/// Checked in this order, the first failure wins:
///
/// - 400 "Missing values" if either field is absent or blank
/// - 400 "Wrong email" / "Wrong username" on format errors
/// - 409 "Email unavailable" / "Username unavailable" on conflicts
/// - 500 "Error creating account" on store failure
pub async fn create_user_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let (Some(email), Some(username)) = (
        normalized(payload.email.as_deref()),
        normalized(payload.username.as_deref()),
    ) else {
        return Err(AppError::bad_request("Missing values", Value::Null));
    };

    if !validate_email(&email) {
        return Err(AppError::bad_request("Wrong email", Value::Null));
    }
    if !validate_username(&username) {
        return Err(AppError::bad_request("Wrong username", Value::Null));
    }

    state
        .user_service
        .create_user(NewUser::new(&email, &username))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Account created",
        }),
    ))
}

/// Fetches a user by username.
///
/// # Endpoint
///
/// `GET /api/user/{username}`
///
/// # Response
///
/// ```json
/// { "id": 1, "email": "alice@example.com", "username": "alice" }
/// ```
///
/// # Errors
///
/// - 400 "Bad Request" if the username is malformed
/// - 404 "User not found"
/// - 500 "Unable to fetch user" on store failure
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserResponse>, AppError> {
    let username = normalized(Some(username.as_str()))
        .filter(|username| validate_username(username))
        .ok_or_else(bad_request)?;

    let user = state.user_service.get_user_by_username(&username).await?;

    Ok(Json(user.into()))
}

/// Removes a user by id.
///
/// # Endpoint
///
/// `DELETE /api/user/remove`
///
/// # Request Body
///
/// ```json
/// { "id": 1 }
/// ```
///
/// The user's links are left in place.
///
/// # Errors
///
/// - 400 "Bad Request" unless `id` is a non-zero integer
/// - 404 "User not found"
/// - 500 "Unable to remove user" on store failure
pub async fn remove_user_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RemoveUserRequest>,
) -> Result<Json<RemoveUserResponse>, AppError> {
    let id = payload.user_id().ok_or_else(bad_request)?;

    let user = state.user_service.remove_user(id).await?;

    Ok(Json(RemoveUserResponse {
        message: "User removed successfully",
        user: user.into(),
    }))
}
