//! Supabase session store (PostgREST over HTTPS).

use async_trait::async_trait;

use super::{SessionQuery, SessionStore, StoreError};
use crate::models::{SessionRecord, SESSION_COLUMNS};

const SESSION_TABLE: &str = "session";

/// Reads the `session` table through Supabase's REST endpoint.
///
/// Holds a pooled `reqwest::Client`; construct once and share.
pub struct SupabaseSessionStore {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl SupabaseSessionStore {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{SESSION_TABLE}", self.base_url)
    }
}

/// PostgREST query parameters for a session lookup. Always limited to one row.
pub fn query_params(query: &SessionQuery) -> Vec<(&'static str, String)> {
    let select = SESSION_COLUMNS.replace(' ', "");
    match query {
        SessionQuery::ById(id) => vec![
            ("select", select),
            ("id", format!("eq.{id}")),
            ("limit", "1".to_string()),
        ],
        SessionQuery::LatestForPatient(patient_id) => vec![
            ("select", select),
            ("patient_id", format!("eq.{patient_id}")),
            ("order", "created_at.desc".to_string()),
            ("limit", "1".to_string()),
        ],
    }
}

#[async_trait]
impl SessionStore for SupabaseSessionStore {
    async fn fetch_session(&self, query: &SessionQuery) -> Result<Option<SessionRecord>, StoreError> {
        let response = self
            .client
            .get(self.table_url())
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(&query_params(query))
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    StoreError::Connection(self.base_url.clone())
                } else {
                    StoreError::Http(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let rows: Vec<SessionRecord> = response
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))?;

        tracing::debug!(?query, rows = rows.len(), "Session lookup complete");
        Ok(rows.into_iter().next())
    }
}
