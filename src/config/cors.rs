use axum::http::{header, HeaderName, Method};
use tower_http::cors::{Any, CorsLayer};

/// Permissive CORS for the public API: any origin, the verbs the routes
/// actually use, and the headers browsers send with JSON requests.
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::ORIGIN,
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static("x-requested-with"),
        ])
}
