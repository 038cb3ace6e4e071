//! Session Q&A: resolve a recorded session, ground the model in it,
//! and return the completion verbatim.

pub mod context;
pub mod openai;
pub mod orchestrator;
pub mod prompt;
pub mod types;

pub use context::build_session_context;
pub use openai::OpenAiClient;
pub use orchestrator::SessionChat;
pub use types::{ChatMessage, ChatRole, CompletionClient, CompletionRequest, LlmError};

use thiserror::Error;

use crate::db::StoreError;

pub const SESSION_NOT_FOUND_DETAIL: &str =
    "No session found for this patient (and session_id, if provided).";

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("No session found for this patient (and session_id, if provided).")]
    NotFound,

    #[error("{0}")]
    Upstream(String),
}

impl From<StoreError> for ChatError {
    fn from(err: StoreError) -> Self {
        ChatError::Upstream(err.to_string())
    }
}

impl From<LlmError> for ChatError {
    fn from(err: LlmError) -> Self {
        ChatError::Upstream(err.to_string())
    }
}
