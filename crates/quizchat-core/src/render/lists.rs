//! Renderers for the two read-only panels

use super::{empty_state, EscapePolicy};
use crate::types::{ChatHistoryEntry, IncorrectQuestion};

/// Render the incorrect-questions panel body
pub fn render_incorrect_questions(questions: &[IncorrectQuestion], policy: EscapePolicy) -> String {
    if questions.is_empty() {
        return empty_state("📝", "No incorrect questions yet");
    }

    questions
        .iter()
        .map(|q| {
            format!(
                r#"
<div class="question-item">
    <div class="question-text">{question}</div>
    <div class="incorrect-answer">❌ Your answer: {yours}</div>
    <div class="correct-answer">✅ Correct answer: {correct}</div>
    <div class="question-meta">
        <div class="meta-item">
            <span>📚</span>
            <span>{topic}</span>
        </div>
        <div class="meta-item">
            <span>📅</span>
            <span>{date}</span>
        </div>
    </div>
</div>
"#,
                question = policy.apply(&q.question),
                yours = policy.apply(&q.your_answer),
                correct = policy.apply(&q.correct_answer),
                topic = policy.apply(&q.topic),
                date = policy.apply(&q.date),
            )
        })
        .collect()
}

/// Render the chat-history panel body
pub fn render_chat_history(entries: &[ChatHistoryEntry], policy: EscapePolicy) -> String {
    if entries.is_empty() {
        return empty_state("💬", "No chat history yet");
    }

    entries
        .iter()
        .map(|entry| {
            format!(
                r#"
<div class="chat-item {kind}-message">
    <div class="chat-header">
        <div class="chat-sender">{sender}</div>
        <div class="chat-time">{time}</div>
    </div>
    <div class="chat-message">{message}</div>
</div>
"#,
                kind = entry.kind,
                sender = policy.apply(&entry.sender),
                time = policy.apply(&entry.timestamp),
                message = policy.apply(&entry.message),
            )
        })
        .collect()
}
