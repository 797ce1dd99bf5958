#![allow(dead_code)]

use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};
use linkbio::api::middleware::cors;
use linkbio::domain::entities::{Link, LinkPatch, NewLink, NewUser, User};
use linkbio::domain::repositories::{LinkRepository, StoreError, UserRepository};
use linkbio::routes::build_router;
use linkbio::state::AppState;
use serde_json::{Value, json};
use std::sync::Arc;

/// Test server over the full router and a fresh in-memory store.
pub fn make_server() -> TestServer {
    server_with_state(AppState::in_memory())
}

/// Test server whose store fails every call.
pub fn make_failing_server() -> TestServer {
    let store = Arc::new(FailingStore);
    server_with_state(AppState::new(store.clone(), store))
}

fn server_with_state(state: AppState) -> TestServer {
    let app = build_router(state, cors::layer(None).unwrap());
    TestServer::new(app).unwrap()
}

pub async fn create_user(server: &TestServer, email: &str, username: &str) {
    server
        .post("/api/user/create")
        .json(&json!({ "email": email, "username": username }))
        .await
        .assert_status(StatusCode::CREATED);
}

pub async fn create_link(server: &TestServer, display_text: &str, url: &str, owner: &str) -> Value {
    let response = server
        .post("/api/link")
        .json(&json!({ "display_text": display_text, "url": url, "owner": owner }))
        .await;

    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}

pub async fn get_user_id(server: &TestServer, username: &str) -> i64 {
    let response = server.get(&format!("/api/user/{username}")).await;
    response.assert_status_ok();
    response.json::<Value>()["id"].as_i64().unwrap()
}

/// Asserts the status and the `error` message of a failed request.
pub fn assert_error(response: &TestResponse, status: StatusCode, message: &str) {
    response.assert_status(status);
    assert_eq!(response.json::<Value>()["error"], message);
}

fn store_failure() -> StoreError {
    StoreError::Database(sqlx::Error::PoolTimedOut)
}

/// Store whose every call fails as if the database were unreachable.
pub struct FailingStore;

#[async_trait]
impl UserRepository for FailingStore {
    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, StoreError> {
        Err(store_failure())
    }

    async fn find_by_username(&self, _username: &str) -> Result<Option<User>, StoreError> {
        Err(store_failure())
    }

    async fn insert(&self, _new_user: NewUser) -> Result<User, StoreError> {
        Err(store_failure())
    }

    async fn delete(&self, _id: i64) -> Result<Option<User>, StoreError> {
        Err(store_failure())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Err(store_failure())
    }
}

#[async_trait]
impl LinkRepository for FailingStore {
    async fn find_by_owner(&self, _owner: &str) -> Result<Vec<Link>, StoreError> {
        Err(store_failure())
    }

    async fn insert(&self, _new_link: NewLink) -> Result<Link, StoreError> {
        Err(store_failure())
    }

    async fn update(&self, _link_id: &str, _patch: LinkPatch) -> Result<Option<Link>, StoreError> {
        Err(store_failure())
    }

    async fn delete(&self, _link_id: &str) -> Result<Option<Link>, StoreError> {
        Err(store_failure())
    }

    async fn count(&self) -> Result<i64, StoreError> {
        Err(store_failure())
    }
}
