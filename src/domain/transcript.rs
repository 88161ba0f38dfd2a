//! Transcript of role-tagged turns sent to the helpdesk backend.

/// Author role of a transcript turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

/// Append-only conversation history.
///
/// The first turn is always the system instruction the store was created
/// with; nothing can remove or rewrite it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    turns: Vec<ChatTurn>,
}

impl Transcript {
    pub fn new(system_instruction: impl Into<String>) -> Self {
        Self {
            turns: vec![ChatTurn {
                role: ChatRole::System,
                content: system_instruction.into(),
            }],
        }
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn system_turn(&self) -> &ChatTurn {
        &self.turns[0]
    }

    pub fn append_user(&mut self, text: impl Into<String>) {
        self.push(ChatRole::User, text.into());
    }

    pub fn append_assistant(&mut self, text: impl Into<String>) {
        self.push(ChatRole::Assistant, text.into());
    }

    fn push(&mut self, role: ChatRole, content: String) {
        self.turns.push(ChatTurn { role, content });
    }
}
