//! Handler for health check endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Reports that the service is up.
///
/// # Endpoint
///
/// `GET /api/health_check`
///
/// The store is not probed; a 200 only means the process is serving requests.
///
/// # Response
///
/// ```json
/// { "status": "online" }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    tracing::debug!("health check ping");

    Json(HealthResponse { status: "online" })
}
