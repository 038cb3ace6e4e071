//! Read-only access to recorded sessions.
//!
//! `SessionStore` is the seam between the chat pipeline and the hosted
//! database. `SupabaseSessionStore` talks to PostgREST over HTTP;
//! `InMemorySessionStore` serves fixtures with the same query semantics.

pub mod memory;
pub mod supabase;

pub use memory::InMemorySessionStore;
pub use supabase::SupabaseSessionStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::SessionRecord;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Session store is not reachable at {0}")]
    Connection(String),

    #[error("Session store returned error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("Failed to decode session rows: {0}")]
    Decode(String),
}

/// Which session row to read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionQuery {
    /// Exactly the row with this id, whoever owns it.
    ById(String),
    /// The most recent row (by `created_at`) for this patient.
    LatestForPatient(String),
}

impl SessionQuery {
    /// `session_id` wins when present; otherwise fall back to the patient's latest.
    pub fn resolve(patient_id: &str, session_id: Option<&str>) -> Self {
        match session_id {
            Some(id) => SessionQuery::ById(id.to_string()),
            None => SessionQuery::LatestForPatient(patient_id.to_string()),
        }
    }
}

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch at most one session row. `Ok(None)` when nothing matches.
    async fn fetch_session(&self, query: &SessionQuery) -> Result<Option<SessionRecord>, StoreError>;
}
