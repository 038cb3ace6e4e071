use super::types::ChatMessage;

pub const SESSION_SYSTEM_PROMPT: &str = "You are a helpful, empathetic healthcare assistant.\n\
You are answering questions about a past medical session based ONLY on the provided context.\n\
Do NOT invent diagnoses or treatments.\n\
If something is unclear or serious, tell the patient to contact their doctor or emergency services.\n";

/// User turn: the patient's question followed by the session context block.
pub fn build_user_prompt(question: &str, context: &str) -> String {
    format!(
        "Patient question: {question}\n\n\
         Here is the context from their last session:\n\n{context}"
    )
}

/// The two-message conversation sent to the completion service.
pub fn build_session_messages(question: &str, context: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SESSION_SYSTEM_PROMPT),
        ChatMessage::user(build_user_prompt(question, context)),
    ]
}
