//! Chat API router.
//!
//! Routes are served at the root and again under `/api`, the prefix the
//! web frontend uses.
//!
//! Layers (outermost → innermost): access log → `Cache-Control: no-store` → handler.

use axum::http::{header, HeaderValue};
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::api::endpoints;
use crate::api::middleware;
use crate::api::types::ApiContext;

/// Build the chat API router.
pub fn chat_api_router(ctx: ApiContext) -> Router {
    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/chat", get(endpoints::chat::ask))
        .with_state(ctx);

    Router::new()
        .merge(routes.clone())
        .nest("/api", routes)
        // Session data must never be cached by browsers or proxies.
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(axum::middleware::from_fn(middleware::audit::log_access))
}

/// CORS for the browser frontend.
///
/// `allowed` is a comma-separated origin list; `None` (or a list with no
/// parseable origin) allows any origin. Only `GET` is ever served.
pub fn cors_layer(allowed: Option<&str>) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([axum::http::Method::GET])
        .allow_headers(Any);

    let origins: Vec<HeaderValue> = allowed
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| s.parse().ok())
        .collect();

    if origins.is_empty() {
        base.allow_origin(Any)
    } else {
        base.allow_origin(origins)
    }
}
