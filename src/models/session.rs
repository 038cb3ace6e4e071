use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::medication::{deserialize_medications, MedicationEntry};

/// Columns read from the `session` table, in select order.
pub const SESSION_COLUMNS: &str = "id, patient_id, transcript, summary, medications, created_at";

/// One recorded patient encounter.
///
/// Rows are written by the recording pipeline; this service only reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    #[serde(deserialize_with = "deserialize_key")]
    pub id: String,
    #[serde(deserialize_with = "deserialize_key")]
    pub patient_id: String,
    #[serde(default)]
    pub transcript: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "deserialize_medications")]
    pub medications: Vec<MedicationEntry>,
    #[serde(default, deserialize_with = "deserialize_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Key columns may be `text`, `uuid` or an integer identity column.
fn deserialize_key<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(D::Error::custom(format!(
            "expected a string or number key, got {other}"
        ))),
    }
}

/// `created_at` may come back as `timestamptz` (with offset) or plain
/// `timestamp` (naive, assumed UTC). Unparseable values only lose ordering.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(raw)) => raw,
        Some(other) => {
            tracing::warn!(value = %other, "Non-text session created_at");
            return Ok(None);
        }
    };
    if let Ok(ts) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(Some(ts.with_timezone(&Utc)));
    }
    match NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f") {
        Ok(naive) => Ok(Some(naive.and_utc())),
        Err(e) => {
            tracing::warn!(value = %raw, error = %e, "Unparseable session created_at");
            Ok(None)
        }
    }
}

impl SessionRecord {
    /// Empty record for a patient, mostly useful for building fixtures.
    pub fn new(id: &str, patient_id: &str) -> Self {
        Self {
            id: id.to_string(),
            patient_id: patient_id.to_string(),
            transcript: None,
            summary: None,
            medications: Vec::new(),
            created_at: None,
        }
    }

    pub fn with_transcript(mut self, transcript: &str) -> Self {
        self.transcript = Some(transcript.to_string());
        self
    }

    pub fn with_summary(mut self, summary: &str) -> Self {
        self.summary = Some(summary.to_string());
        self
    }

    pub fn with_medications(mut self, medications: Vec<MedicationEntry>) -> Self {
        self.medications = medications;
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}
