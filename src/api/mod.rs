//! HTTP surface: one read-only chat endpoint plus a health probe.
//!
//! `chat_api_router()` returns a `Router` that can be mounted on any axum
//! server; `server` owns the listener lifecycle.

pub mod endpoints;
pub mod error;
pub mod middleware;
pub mod router;
pub mod server;
pub mod types;

pub use router::{chat_api_router, cors_layer};
pub use server::{start_api_server, ApiServer, ApiServerInfo, ServerError};
pub use types::ApiContext;
