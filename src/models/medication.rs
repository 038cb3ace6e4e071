use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One medication line recorded during a session.
///
/// Both fields are optional in the stored JSON; rendering falls back to
/// `unknown` for the name and an empty reason.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationEntry {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub reason: Option<String>,
}

impl MedicationEntry {
    pub fn new(name: &str, reason: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            reason: Some(reason.to_string()),
        }
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("unknown")
    }

    pub fn display_reason(&self) -> &str {
        self.reason.as_deref().unwrap_or("")
    }
}

/// Accept any JSON scalar for a text field. `null` is treated as absent,
/// numbers and booleans keep their JSON spelling.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// Decode the `medications` column.
///
/// The column is free-form JSON written by the recording pipeline. Only
/// object entries are kept; anything else (bare strings, numbers, nested
/// arrays) is dropped, and a non-array value decodes as an empty list.
pub fn deserialize_medications<'de, D>(deserializer: D) -> Result<Vec<MedicationEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(items)) = value else {
        return Ok(Vec::new());
    };

    let entries = items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| match serde_json::from_value::<MedicationEntry>(item) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!(error = %e, "Skipping undecodable medication entry");
                None
            }
        })
        .collect();

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Wrapper {
        #[serde(default, deserialize_with = "deserialize_medications")]
        medications: Vec<MedicationEntry>,
    }

    fn decode(value: Value) -> Vec<MedicationEntry> {
        serde_json::from_value::<Wrapper>(value).unwrap().medications
    }

    #[test]
    fn keeps_object_entries_in_order() {
        let meds = decode(json!({
            "medications": [
                {"name": "Aspirin", "reason": "headache"},
                {"name": "Ibuprofen", "reason": "pain"}
            ]
        }));
        assert_eq!(
            meds,
            vec![
                MedicationEntry::new("Aspirin", "headache"),
                MedicationEntry::new("Ibuprofen", "pain"),
            ]
        );
    }

    #[test]
    fn drops_non_object_entries() {
        let meds = decode(json!({
            "medications": ["Aspirin", 42, null, ["nested"], {"name": "Ibuprofen"}]
        }));
        assert_eq!(meds.len(), 1);
        assert_eq!(meds[0].display_name(), "Ibuprofen");
        assert_eq!(meds[0].display_reason(), "");
    }

    #[test]
    fn missing_null_or_non_array_column_is_empty() {
        assert!(decode(json!({})).is_empty());
        assert!(decode(json!({"medications": null})).is_empty());
        assert!(decode(json!({"medications": "Aspirin"})).is_empty());
        assert!(decode(json!({"medications": {"name": "Aspirin"}})).is_empty());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let meds = decode(json!({"medications": [{}, {"name": null, "reason": null}]}));
        assert_eq!(meds.len(), 2);
        for med in &meds {
            assert_eq!(med.display_name(), "unknown");
            assert_eq!(med.display_reason(), "");
        }
    }

    #[test]
    fn scalar_fields_keep_json_spelling() {
        let meds = decode(json!({"medications": [{"name": "Vitamin D", "reason": 1000}]}));
        assert_eq!(meds[0].display_reason(), "1000");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let meds = decode(json!({
            "medications": [{"name": "Metformin", "reason": "diabetes", "dose": "500mg"}]
        }));
        assert_eq!(meds, vec![MedicationEntry::new("Metformin", "diabetes")]);
    }
}
