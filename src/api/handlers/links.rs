//! Handlers for link endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::Value;
use validator::Validate;

use crate::api::dto::link::{CreateLinkRequest, DeleteLinkResponse, LinkResponse, UpdateLinkRequest};
use crate::api::dto::non_empty;
use crate::api::extract::AppJson;
use crate::error::AppError;
use crate::state::AppState;

/// Lists the links owned by a user.
///
/// # Endpoint
///
/// `GET /api/link/{username}`
///
/// The owner is matched exactly as stored; it is trimmed but not lowercased.
///
/// # Response
///
/// ```json
/// [
///   { "linkId": "5f0c...", "display_text": "Blog", "url": "blog.example.com", "owner": "alice" }
/// ]
/// ```
///
/// # Errors
///
/// - 400 "Bad Request" if the username is blank
/// - 404 "No links found" if the owner has no links
/// - 500 "Error getting links" on store failure
pub async fn get_links_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let owner = non_empty(Some(username.as_str()))
        .ok_or_else(|| AppError::bad_request("Bad Request", Value::Null))?;

    let links = state.link_service.get_links_by_username(owner).await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}

/// Creates a link.
///
/// # Endpoint
///
/// `POST /api/link`
///
/// # Request Body
///
/// ```json
/// { "display_text": "Blog", "url": "blog.example.com", "owner": "alice" }
/// ```
///
/// # Response
///
/// `201 Created` with the new link, including its generated `linkId`.
///
/// # Errors
///
/// - 400 "Missing values" if any field is absent or blank
/// - 400 "URL is not valid"
/// - 500 "Error creating link" on store failure
pub async fn create_link_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    if payload.has_missing_fields() {
        return Err(AppError::bad_request("Missing values", Value::Null));
    }
    payload.validate()?;

    let link = state
        .link_service
        .create_link(payload.into_new_link())
        .await?;

    Ok((StatusCode::CREATED, Json(link.into())))
}

/// Partially updates a link.
///
/// # Endpoint
///
/// `PUT /api/link/{linkId}`
///
/// # Request Body
///
/// ```json
/// { "display_text": "New title" }
/// ```
///
/// Either field may be omitted; blank strings count as omitted.
///
/// # Errors
///
/// - 400 "Bad Request" if the link id is blank
/// - 400 "No update values provided"
/// - 400 "URL is not valid"
/// - 404 "Link not found"
/// - 500 "Error updating link" on store failure
pub async fn update_link_handler(
    State(state): State<AppState>,
    Path(link_id): Path<String>,
    AppJson(payload): AppJson<UpdateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    let link_id = non_empty(Some(link_id.as_str()))
        .ok_or_else(|| AppError::bad_request("Bad Request", Value::Null))?;

    let payload = payload.without_blank_fields();
    if payload.display_text.is_none() && payload.url.is_none() {
        return Err(AppError::bad_request(
            "No update values provided",
            Value::Null,
        ));
    }
    payload.validate()?;

    let link = state
        .link_service
        .update_link(link_id, payload.into())
        .await?;

    Ok(Json(link.into()))
}

/// Deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/link/{linkId}`
///
/// # Response
///
/// ```json
/// { "message": "Link removed successfully", "link": { "linkId": "5f0c...", ... } }
/// ```
///
/// # Errors
///
/// - 400 "Bad Request" if the link id is blank
/// - 404 "Link not found"
/// - 500 "Error deleting link" on store failure
pub async fn delete_link_handler(
    State(state): State<AppState>,
    Path(link_id): Path<String>,
) -> Result<Json<DeleteLinkResponse>, AppError> {
    let link_id = non_empty(Some(link_id.as_str()))
        .ok_or_else(|| AppError::bad_request("Bad Request", Value::Null))?;

    let link = state.link_service.delete_link(link_id).await?;

    Ok(Json(DeleteLinkResponse {
        message: "Link removed successfully",
        link: link.into(),
    }))
}
