use crate::models::SessionRecord;

pub const NO_SUMMARY: &str = "No summary available.";
pub const NO_TRANSCRIPT: &str = "No transcript available.";
pub const NO_MEDICATIONS: &str = "No medications recorded.";

/// Render one session record as the grounding block handed to the model.
///
/// Sections always appear in the same order (summary, transcript,
/// medications). Missing or empty fields become placeholders, so the
/// function never fails.
pub fn build_session_context(record: &SessionRecord) -> String {
    let summary = non_empty(record.summary.as_deref()).unwrap_or(NO_SUMMARY);
    let transcript = non_empty(record.transcript.as_deref()).unwrap_or(NO_TRANSCRIPT);
    let medications = format_medications(record);

    [
        "=== Session Summary ===",
        summary,
        "",
        "=== Transcript ===",
        transcript,
        "",
        "=== Medications ===",
        medications.as_str(),
    ]
    .join("\n")
}

fn format_medications(record: &SessionRecord) -> String {
    if record.medications.is_empty() {
        return NO_MEDICATIONS.to_string();
    }
    record
        .medications
        .iter()
        .map(|m| format!("- {}: {}", m.display_name(), m.display_reason()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MedicationEntry;

    fn empty_record() -> SessionRecord {
        SessionRecord::new("s1", "p1")
    }

    #[test]
    fn empty_record_uses_all_placeholders_in_order() {
        let context = build_session_context(&empty_record());
        let summary_at = context.find(NO_SUMMARY).unwrap();
        let transcript_at = context.find(NO_TRANSCRIPT).unwrap();
        let meds_at = context.find(NO_MEDICATIONS).unwrap();
        assert!(summary_at < transcript_at);
        assert!(transcript_at < meds_at);
    }

    #[test]
    fn empty_strings_count_as_missing() {
        let record = empty_record().with_summary("").with_transcript("");
        let context = build_session_context(&record);
        assert!(context.contains(NO_SUMMARY));
        assert!(context.contains(NO_TRANSCRIPT));
    }

    #[test]
    fn exact_layout_for_full_record() {
        let record = empty_record()
            .with_summary("Patient reported headaches.")
            .with_transcript("Doctor: Any pain?\nPatient: Yes.")
            .with_medications(vec![
                MedicationEntry::new("Aspirin", "headache"),
                MedicationEntry::new("Ibuprofen", "pain"),
            ]);
        let expected = "=== Session Summary ===\n\
                        Patient reported headaches.\n\
                        \n\
                        === Transcript ===\n\
                        Doctor: Any pain?\n\
                        Patient: Yes.\n\
                        \n\
                        === Medications ===\n\
                        - Aspirin: headache\n\
                        - Ibuprofen: pain";
        assert_eq!(build_session_context(&record), expected);
    }

    #[test]
    fn medication_line_for_aspirin() {
        let record = empty_record().with_medications(vec![
            MedicationEntry::new("Metformin", "diabetes"),
            MedicationEntry::new("Aspirin", "headache"),
        ]);
        let context = build_session_context(&record);
        assert!(context.lines().any(|l| l == "- Aspirin: headache"));
        assert!(!context.contains(NO_MEDICATIONS));
    }

    #[test]
    fn medication_defaults_render_unknown_and_blank_reason() {
        let record = empty_record().with_medications(vec![MedicationEntry::default()]);
        let context = build_session_context(&record);
        assert!(context.lines().any(|l| l == "- unknown: "));
    }

    #[test]
    fn non_mapping_entries_are_skipped_end_to_end() {
        let row = r#"{"id": "s1", "patient_id": "p1", "medications": ["Aspirin", 7]}"#;
        let record: SessionRecord = serde_json::from_str(row).unwrap();
        let context = build_session_context(&record);
        assert!(context.ends_with(NO_MEDICATIONS));
    }

    #[test]
    fn output_is_deterministic() {
        let record = empty_record()
            .with_summary("s")
            .with_medications(vec![MedicationEntry::new("A", "b")]);
        assert_eq!(build_session_context(&record), build_session_context(&record));
    }
}
