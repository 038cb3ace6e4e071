//! Access logging middleware.
//!
//! Logs method, path, response status and latency for every request.
//! Query strings are not logged: they carry patient questions.

use std::time::Instant;

use axum::http::{HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use tracing::Instrument;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Run the request inside a span carrying a request id (reusing a
/// well-formed incoming one) and log the outcome.
pub async fn log_access(req: Request<axum::body::Body>, next: Next) -> Response {
    let started = Instant::now();
    let request_id = req
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::new_v4);

    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let span = tracing::info_span!("http_request", %request_id, %method, %path);

    async move {
        let mut response = next.run(req).await;

        let status = response.status().as_u16();
        let latency_ms = started.elapsed().as_millis();
        if response.status().is_server_error() {
            tracing::warn!(status, latency_ms, "request failed");
        } else {
            tracing::info!(status, latency_ms, "request handled");
        }

        if let Ok(val) = HeaderValue::from_str(&request_id.to_string()) {
            response.headers_mut().insert(REQUEST_ID_HEADER, val);
        }
        response
    }
    .instrument(span)
    .await
}
