use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed completion model for session Q&A.
pub const SESSION_CHAT_MODEL: &str = "gpt-4o-mini";

/// Low temperature keeps answers close to the supplied context.
pub const SESSION_CHAT_TEMPERATURE: f32 = 0.1;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("Completion service is not reachable at {0}")]
    Connection(String),

    #[error("Completion service returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("Completion service returned no choices")]
    EmptyResponse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// One non-streaming chat completion call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

impl CompletionRequest {
    /// Request with the fixed session Q&A model and temperature.
    pub fn session_chat(messages: Vec<ChatMessage>) -> Self {
        Self {
            model: SESSION_CHAT_MODEL.to_string(),
            messages,
            temperature: SESSION_CHAT_TEMPERATURE,
        }
    }
}

/// Chat-completion backend. Returns the first choice's text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_serialize_lowercase() {
        let json = serde_json::to_value(ChatMessage::system("be kind")).unwrap();
        assert_eq!(json["role"], "system");
        assert_eq!(json["content"], "be kind");
        let json = serde_json::to_value(ChatMessage::user("hi")).unwrap();
        assert_eq!(json["role"], "user");
    }

    #[test]
    fn session_chat_request_uses_fixed_model_and_temperature() {
        let request = CompletionRequest::session_chat(vec![ChatMessage::user("q")]);
        assert_eq!(request.model, "gpt-4o-mini");
        assert!((request.temperature - 0.1).abs() < f32::EPSILON);
        assert_eq!(request.messages.len(), 1);
    }
}
