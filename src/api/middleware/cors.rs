//! Cross-origin resource sharing.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Creates the CORS layer.
///
/// With no `allowed_origin` any origin may call the API. Otherwise only the
/// given origin is echoed back.
///
/// # Errors
///
/// Returns an error if `allowed_origin` is not a valid header value.
pub fn layer(allowed_origin: Option<&str>) -> anyhow::Result<CorsLayer> {
    let origin = match allowed_origin {
        Some(origin) => AllowOrigin::exact(HeaderValue::from_str(origin)?),
        None => AllowOrigin::any(),
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_accepts_origin() {
        assert!(layer(None).is_ok());
        assert!(layer(Some("https://app.example.com")).is_ok());
    }

    #[test]
    fn test_layer_rejects_invalid_origin() {
        assert!(layer(Some("bad\norigin")).is_err());
    }
}
