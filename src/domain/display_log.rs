//! User-facing conversation history rendered by the helpdesk screen.

use chrono::Utc;

/// Who a rendered message is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageAuthor {
    User,
    Assistant,
    /// Failure notice shown in place of an assistant reply.
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayMessage {
    pub text: String,
    pub author: MessageAuthor,
    pub sent_at_unix_ms: i64,
}

impl DisplayMessage {
    fn now(text: String, author: MessageAuthor) -> Self {
        Self {
            text,
            author,
            sent_at_unix_ms: Utc::now().timestamp_millis(),
        }
    }

    /// Controls bubble alignment: user messages sit on the right.
    pub fn is_from_user(&self) -> bool {
        self.author == MessageAuthor::User
    }
}

/// Append-only list of rendered messages, seeded with a greeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLog {
    messages: Vec<DisplayMessage>,
}

impl DisplayLog {
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![DisplayMessage::now(
                greeting.into(),
                MessageAuthor::Assistant,
            )],
        }
    }

    pub fn messages(&self) -> &[DisplayMessage] {
        &self.messages
    }

    pub fn last(&self) -> Option<&DisplayMessage> {
        self.messages.last()
    }

    pub fn append_user(&mut self, text: impl Into<String>) {
        self.push(text.into(), MessageAuthor::User);
    }

    pub fn append_assistant(&mut self, text: impl Into<String>) {
        self.push(text.into(), MessageAuthor::Assistant);
    }

    pub fn append_error(&mut self, text: impl Into<String>) {
        self.push(text.into(), MessageAuthor::Error);
    }

    fn push(&mut self, text: String, author: MessageAuthor) {
        self.messages.push(DisplayMessage::now(text, author));
    }
}
