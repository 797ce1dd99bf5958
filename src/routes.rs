//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `/api/*` - REST API, see [`crate::api::routes::api_routes`]
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Any origin unless `CORS_ALLOWED_ORIGIN` is set
//! - **Path normalization** - Trailing slashes are trimmed

use axum::Router;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Builds the router with every route and middleware except path
/// normalization.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(cors)
        .layer(tracing::layer())
}

/// Constructs the application service.
///
/// Path normalization has to wrap the router rather than be layered onto it,
/// otherwise the trailing slash is trimmed after routing already happened.
pub fn app_router(state: AppState, cors: CorsLayer) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state, cors))
}
