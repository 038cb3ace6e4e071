use std::sync::Arc;

use super::context::build_session_context;
use super::prompt::build_session_messages;
use super::types::{CompletionClient, CompletionRequest};
use super::ChatError;
use crate::db::{SessionQuery, SessionStore};

/// Answers a patient's question about one recorded session.
///
/// Coordinates: resolve session → build context → prompt → complete.
/// Both backends are injected so tests can substitute doubles.
#[derive(Clone)]
pub struct SessionChat {
    store: Arc<dyn SessionStore>,
    llm: Arc<dyn CompletionClient>,
}

impl SessionChat {
    pub fn new(store: Arc<dyn SessionStore>, llm: Arc<dyn CompletionClient>) -> Self {
        Self { store, llm }
    }

    /// Answer `question` from the session named by `session_id`, or from the
    /// patient's most recent session when no id is given.
    ///
    /// A `session_id` is not checked against `patient_id`; any existing
    /// session can be addressed by id.
    pub async fn answer_question(
        &self,
        patient_id: &str,
        question: &str,
        session_id: Option<&str>,
    ) -> Result<String, ChatError> {
        let query = SessionQuery::resolve(patient_id, session_id);
        let record = self
            .store
            .fetch_session(&query)
            .await
            .inspect_err(|e| tracing::error!(error = ?e, ?query, "Session lookup failed"))?
            .ok_or(ChatError::NotFound)?;

        tracing::debug!(
            session_id = %record.id,
            medications = record.medications.len(),
            "Session resolved for chat"
        );

        let context = build_session_context(&record);
        let request = CompletionRequest::session_chat(build_session_messages(question, &context));
        let answer = self
            .llm
            .complete(&request)
            .await
            .inspect_err(|e| tracing::error!(error = ?e, model = %request.model, "Chat completion failed"))?;

        Ok(answer)
    }
}
