use async_trait::async_trait;

use super::{SessionQuery, SessionStore, StoreError};
use crate::models::SessionRecord;

/// Session store backed by a plain `Vec`, for tests and offline runs.
#[derive(Debug, Default, Clone)]
pub struct InMemorySessionStore {
    records: Vec<SessionRecord>,
}

impl InMemorySessionStore {
    pub fn new(records: Vec<SessionRecord>) -> Self {
        Self { records }
    }

    pub fn insert(&mut self, record: SessionRecord) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn fetch_session(&self, query: &SessionQuery) -> Result<Option<SessionRecord>, StoreError> {
        let found = match query {
            SessionQuery::ById(id) => self.records.iter().find(|r| &r.id == id),
            // `Option` orders `None` first, so rows without a timestamp lose.
            SessionQuery::LatestForPatient(patient_id) => self
                .records
                .iter()
                .filter(|r| &r.patient_id == patient_id)
                .max_by_key(|r| r.created_at),
        };
        Ok(found.cloned())
    }
}
