//! Cross-cutting HTTP layers applied to every route.
//!
//! Any origin may call the API with any method and headers, and each request
//! is traced through `tracing`.

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub fn apply(router: Router) -> Router {
    router
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}
