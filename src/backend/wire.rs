//! JSON wire format spoken by the helpdesk cloud function.
//!
//! Request: `{"messages":[{"role":"system","content":"..."}, ...]}` with the
//! earliest turn first. Response: an object with a string `message` field.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::domain::transcript::{ChatRole, Transcript};

/// Role tags written on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleLabels {
    pub system: String,
    pub user: String,
    pub assistant: String,
}

impl Default for RoleLabels {
    fn default() -> Self {
        Self::with_assistant_label("assistant")
    }
}

impl RoleLabels {
    pub fn with_assistant_label(assistant: impl Into<String>) -> Self {
        Self {
            system: "system".to_owned(),
            user: "user".to_owned(),
            assistant: assistant.into(),
        }
    }

    fn label(&self, role: ChatRole) -> &str {
        match role {
            ChatRole::System => &self.system,
            ChatRole::User => &self.user,
            ChatRole::Assistant => &self.assistant,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    messages: Vec<WireTurn<'a>>,
}

#[derive(Debug, Serialize)]
struct WireTurn<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Error)]
pub enum ReplyDecodeError {
    #[error("response body is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),
    #[error("response is not an object with a string `message` field")]
    MissingMessage,
}

pub fn encode_request(
    transcript: &Transcript,
    labels: &RoleLabels,
) -> Result<Vec<u8>, serde_json::Error> {
    let request = ChatRequest {
        messages: transcript
            .turns()
            .iter()
            .map(|turn| WireTurn {
                role: labels.label(turn.role),
                content: &turn.content,
            })
            .collect(),
    };

    serde_json::to_vec(&request)
}

pub fn decode_reply(body: &[u8]) -> Result<String, ReplyDecodeError> {
    let mut reply: Value = serde_json::from_slice(body).map_err(ReplyDecodeError::InvalidJson)?;

    match reply.get_mut("message").map(Value::take) {
        Some(Value::String(message)) => Ok(message),
        _ => Err(ReplyDecodeError::MissingMessage),
    }
}
