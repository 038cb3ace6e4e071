//! Shared types for the HTTP layer.

use std::sync::Arc;

use crate::pipeline::chat::SessionChat;

/// Shared context for all API routes and middleware.
#[derive(Clone)]
pub struct ApiContext {
    pub chat: Arc<SessionChat>,
}

impl ApiContext {
    pub fn new(chat: SessionChat) -> Self {
        Self {
            chat: Arc::new(chat),
        }
    }
}
