//! Chat bubble and welcome markup

use super::EscapePolicy;
use crate::types::ChatMessage;

/// Render one live chat bubble
pub fn render_chat_bubble(message: &ChatMessage, policy: EscapePolicy) -> String {
    format!(
        r#"<div class="chat-message {sender}">
    <div class="message-bubble">{text}</div>
    <div class="message-time">{time}</div>
</div>"#,
        sender = message.sender,
        text = policy.apply(&message.message),
        time = policy.apply(&message.timestamp),
    )
}

/// Placeholder shown in the message list before the first message
pub fn render_welcome() -> String {
    r#"<div class="welcome-message">
    <div style="font-size: 48px; margin-bottom: 16px;">👋</div>
    <div style="font-size: 18px; font-weight: 500; color: #667eea; margin-bottom: 8px;">Welcome to Chat Assistant!</div>
    <div>Start a conversation by typing a message below.</div>
</div>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_user_bubble() {
        let msg = ChatMessage::user("hi", "09:05 AM");
        assert_eq!(
            render_chat_bubble(&msg, EscapePolicy::Escape),
            r#"<div class="chat-message user">
    <div class="message-bubble">hi</div>
    <div class="message-time">09:05 AM</div>
</div>"#
        );
    }

    #[test]
    fn test_bot_bubble_class() {
        let msg = ChatMessage::bot("hello & welcome", "21:05");
        let markup = render_chat_bubble(&msg, EscapePolicy::Escape);
        assert!(markup.starts_with(r#"<div class="chat-message bot">"#));
        assert!(markup.contains("hello &amp; welcome"));
    }

    #[test]
    fn test_welcome_markup() {
        let markup = render_welcome();
        assert!(markup.contains("welcome-message"));
        assert!(markup.contains("Welcome to Chat Assistant!"));
    }
}
