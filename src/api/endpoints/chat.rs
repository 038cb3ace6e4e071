//! `GET /chat`: answer a question about a recorded session.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::pipeline::chat::ChatError;

/// Chat query parameters. Read from raw pairs so a repeated key keeps its
/// last value and a missing one produces a JSON `detail` body.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ChatQuery {
    pub patient_id: Option<String>,
    pub question: Option<String>,
    pub session_id: Option<String>,
}

impl ChatQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "patient_id" => query.patient_id = Some(value),
                "question" => query.question = Some(value),
                "session_id" => query.session_id = Some(value),
                _ => {}
            }
        }
        query
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatResponse {
    pub patient_id: String,
    pub question: String,
    pub answer: String,
}

/// Absent parameters are rejected; present but empty values pass through.
fn required(value: Option<String>, name: &str) -> Result<String, ApiError> {
    value.ok_or_else(|| ApiError::Unprocessable(format!("Missing required query parameter: {name}")))
}

/// Read-only: fetches one session row and makes one completion call.
pub async fn ask(
    State(ctx): State<ApiContext>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Query(pairs) = pairs.map_err(|rejection| ApiError::Unprocessable(rejection.body_text()))?;
    let query = ChatQuery::from_pairs(pairs);

    let patient_id = required(query.patient_id, "patient_id")?;
    let question = required(query.question, "question")?;
    let session_id = query.session_id.filter(|s| !s.is_empty());

    // Upstream failures are logged where they happen, in `SessionChat`.
    let answer = ctx
        .chat
        .answer_question(&patient_id, &question, session_id.as_deref())
        .await
        .inspect_err(|err| {
            if matches!(err, ChatError::NotFound) {
                tracing::warn!(%patient_id, session_id = ?session_id, "No session found for chat");
            }
        })?;

    Ok(Json(ChatResponse {
        patient_id,
        question,
        answer,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn repeated_key_keeps_last_value() {
        let query = ChatQuery::from_pairs(pairs(&[
            ("patient_id", "p1"),
            ("question", "first"),
            ("question", "second"),
        ]));
        assert_eq!(query.question.as_deref(), Some("second"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let query = ChatQuery::from_pairs(pairs(&[("patient_id", "p1"), ("lang", "en")]));
        assert_eq!(
            query,
            ChatQuery {
                patient_id: Some("p1".into()),
                ..ChatQuery::default()
            }
        );
    }

    #[test]
    fn empty_value_is_present_not_missing() {
        assert_eq!(required(Some(String::new()), "question").unwrap(), "");
        let err = required(None, "question").unwrap_err();
        assert_eq!(err.detail(), "Missing required query parameter: question");
    }
}
