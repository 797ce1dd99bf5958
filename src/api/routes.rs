//! API route configuration.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};

use crate::api::dto::user::UserResponse;
use crate::api::handlers::{
    check_email_handler, check_username_handler, create_link_handler, create_user_handler,
    delete_link_handler, get_links_handler, get_user_handler, health_handler,
    remove_user_handler, update_link_handler,
};
use crate::error::AppError;
use crate::state::AppState;

/// All API routes, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET    /health_check`            - Liveness probe
/// - `POST   /user/email-available`    - Check whether an email is free
/// - `POST   /user/username-available` - Check whether a username is free
/// - `POST   /user/create`             - Register an account
/// - `DELETE /user/remove`             - Remove an account by id
/// - `GET    /user/{username}`         - Fetch an account (also `create` and `remove`)
/// - `POST   /link`                    - Create a link
/// - `GET    /link/{username}`         - List a user's links
/// - `PUT    /link/{linkId}`           - Partially update a link
/// - `DELETE /link/{linkId}`           - Delete a link
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health_check", get(health_handler))
        .nest("/user", user_routes())
        .nest("/link", link_routes())
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/email-available", post(check_email_handler))
        .route("/username-available", post(check_username_handler))
        .route(
            "/create",
            post(create_user_handler)
                .get(|state: State<AppState>| lookup_literal(state, "create")),
        )
        .route(
            "/remove",
            get(|state: State<AppState>| lookup_literal(state, "remove"))
                .delete(remove_user_handler),
        )
        .route("/{username}", get(get_user_handler))
}

// Static segments win over `{username}` and axum answers 405 on a method
// mismatch, so GET on them is routed to the lookup explicitly.
async fn lookup_literal(
    state: State<AppState>,
    username: &'static str,
) -> Result<Json<UserResponse>, AppError> {
    get_user_handler(state, Path(username.to_string())).await
}

// A path segment can only have one parameter name, so owner lookups and
// link id operations share `{key}`.
fn link_routes() -> Router<AppState> {
    Router::new().route("/", post(create_link_handler)).route(
        "/{key}",
        get(get_links_handler)
            .put(update_link_handler)
            .delete(delete_link_handler),
    )
}
