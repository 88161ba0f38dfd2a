//! One helpdesk exchange: record the user's text, post the transcript, and
//! fold the reply (or failure) back into the screen state.
//!
//! Both `send` and `complete` run on the thread that owns `HelpdeskState`;
//! the network round trip happens behind `ExchangeDispatcher`.

use crate::{
    backend::wire::{self, RoleLabels},
    domain::{
        exchange::{ExchangeCompletion, ExchangeId, ExchangeRequest},
        helpdesk_state::HelpdeskState,
        persona,
        transcript::Transcript,
    },
    infra::config::BackendConfig,
};

use super::contracts::ExchangeDispatcher;

const EXCHANGE_ENCODE_FAILED: &str = "HELPDESK_EXCHANGE_ENCODE_FAILED";
const EXCHANGE_TRANSPORT_FAILED: &str = "HELPDESK_EXCHANGE_TRANSPORT_FAILED";
const EXCHANGE_REPLY_MALFORMED: &str = "HELPDESK_EXCHANGE_REPLY_MALFORMED";

/// Serializes a transcript into a request body.
pub type RequestEncoder = fn(&Transcript, &RoleLabels) -> Result<Vec<u8>, serde_json::Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExchangeSettings {
    pub labels: RoleLabels,
    /// Append replies to the transcript so later requests carry them.
    pub record_assistant_replies: bool,
}

impl Default for ExchangeSettings {
    fn default() -> Self {
        Self {
            labels: RoleLabels::default(),
            record_assistant_replies: true,
        }
    }
}

impl ExchangeSettings {
    pub fn from_config(config: &BackendConfig) -> Self {
        Self {
            labels: RoleLabels::with_assistant_label(config.assistant_role_label.clone()),
            record_assistant_replies: config.record_assistant_replies,
        }
    }
}

/// How a completed exchange was folded into the display log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeOutcome {
    Replied,
    TransportFailed,
    MalformedReply,
}

pub struct ExchangeController<D>
where
    D: ExchangeDispatcher,
{
    dispatcher: D,
    settings: ExchangeSettings,
    encode: RequestEncoder,
    next_id: u64,
}

impl<D> ExchangeController<D>
where
    D: ExchangeDispatcher,
{
    pub fn new(dispatcher: D, settings: ExchangeSettings) -> Self {
        Self {
            dispatcher,
            settings,
            encode: wire::encode_request,
            next_id: 1,
        }
    }

    #[cfg(test)]
    pub fn with_encoder(mut self, encode: RequestEncoder) -> Self {
        self.encode = encode;
        self
    }

    #[cfg(test)]
    pub fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// Starts an exchange for `user_text`.
    ///
    /// Empty text is ignored. Otherwise the text lands in both logs, the
    /// input buffer is cleared, and one request carrying the whole
    /// transcript is dispatched. Returns `None` when nothing was sent.
    pub fn send(&mut self, state: &mut HelpdeskState, user_text: &str) -> Option<ExchangeId> {
        if user_text.is_empty() {
            return None;
        }

        state.display_log_mut().append_user(user_text);
        state.transcript_mut().append_user(user_text);
        state.input_mut().clear();
        state.begin_exchange();

        let id = ExchangeId::new(self.next_id);
        self.next_id += 1;

        let body = match (self.encode)(state.transcript(), &self.settings.labels) {
            Ok(body) => body,
            Err(error) => {
                tracing::error!(
                    code = EXCHANGE_ENCODE_FAILED,
                    exchange = %id,
                    error = %error,
                    "helpdesk request could not be serialized, exchange abandoned"
                );
                state.finish_exchange();
                state
                    .display_log_mut()
                    .append_error(persona::error_text(&error.to_string()));
                return None;
            }
        };

        tracing::info!(
            exchange = %id,
            turns = state.transcript().turns().len(),
            in_flight = state.in_flight(),
            "helpdesk exchange started"
        );

        self.dispatcher.dispatch(ExchangeRequest { id, body });
        Some(id)
    }

    /// Applies the result of a finished exchange. Called once per request.
    pub fn complete(
        &mut self,
        state: &mut HelpdeskState,
        completion: ExchangeCompletion,
    ) -> ExchangeOutcome {
        state.finish_exchange();
        let id = completion.id;

        let body = match completion.result {
            Ok(body) => body,
            Err(error) => {
                tracing::warn!(
                    code = EXCHANGE_TRANSPORT_FAILED,
                    exchange = %id,
                    kind = ?error.kind,
                    error = %error,
                    "helpdesk request failed"
                );
                state
                    .display_log_mut()
                    .append_error(persona::error_text(&error.description));
                return ExchangeOutcome::TransportFailed;
            }
        };

        match wire::decode_reply(&body) {
            Ok(reply) => {
                tracing::info!(exchange = %id, chars = reply.chars().count(), "helpdesk reply received");
                if self.settings.record_assistant_replies {
                    state.transcript_mut().append_assistant(reply.clone());
                }
                state.display_log_mut().append_assistant(reply);
                ExchangeOutcome::Replied
            }
            Err(error) => {
                tracing::warn!(
                    code = EXCHANGE_REPLY_MALFORMED,
                    exchange = %id,
                    error = %error,
                    "helpdesk reply could not be decoded"
                );
                state.display_log_mut().append_error(persona::GENERIC_ERROR);
                ExchangeOutcome::MalformedReply
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::{
        domain::{
            display_log::MessageAuthor,
            exchange::{TransportError, TransportErrorKind},
            transcript::ChatRole,
        },
        infra::stubs::RecordingDispatcher,
    };

    fn controller() -> ExchangeController<RecordingDispatcher> {
        ExchangeController::new(RecordingDispatcher::default(), ExchangeSettings::default())
    }

    fn typed_state(text: &str) -> HelpdeskState {
        let mut state = HelpdeskState::default();
        for ch in text.chars() {
            state.input_mut().insert_char(ch);
        }
        state
    }

    fn request_json(controller: &ExchangeController<RecordingDispatcher>, index: usize) -> Value {
        let requests = controller.dispatcher().requests.borrow();
        serde_json::from_slice(&requests[index].body).expect("request body is JSON")
    }

    fn offline() -> TransportError {
        TransportError::new(TransportErrorKind::Connect, "error sending request: connection refused")
    }

    fn unencodable(
        _transcript: &Transcript,
        _labels: &RoleLabels,
    ) -> Result<Vec<u8>, serde_json::Error> {
        Err(serde_json::from_str::<Value>("{").expect_err("truncated JSON"))
    }

    #[test]
    fn encode_failure_shows_error_and_dispatches_nothing() {
        let mut controller = controller().with_encoder(unencodable);
        let mut state = typed_state("Hello");

        let id = controller.send(&mut state, "Hello");

        assert_eq!(id, None);
        assert!(!state.is_pending());
        assert!(state.input().is_empty());
        assert!(controller.dispatcher().requests.borrow().is_empty());
        let last = state.display_log().last().expect("error entry");
        assert_eq!(last.author, MessageAuthor::Error);
        assert!(last.text.starts_with("Error: "));
        assert_eq!(state.transcript().turns().len(), 2);
    }

    #[test]
    fn empty_text_is_a_no_op() {
        let mut controller = controller();
        let mut state = HelpdeskState::default();
        let before = state.clone();

        let id = controller.send(&mut state, "");

        assert_eq!(id, None);
        assert_eq!(state, before);
        assert!(controller.dispatcher().requests.borrow().is_empty());
    }

    #[test]
    fn send_appends_to_both_logs_clears_input_and_marks_pending() {
        let mut controller = controller();
        let mut state = typed_state("What is EdgeOne?");

        let id = controller.send(&mut state, "What is EdgeOne?");

        assert_eq!(id, Some(ExchangeId::new(1)));
        assert_eq!(state.display_log().messages().len(), 2);
        let last = state.display_log().last().expect("user entry");
        assert_eq!(last.text, "What is EdgeOne?");
        assert!(last.is_from_user());
        assert_eq!(state.transcript().turns().len(), 2);
        assert_eq!(state.transcript().turns()[1].role, ChatRole::User);
        assert!(state.input().is_empty());
        assert!(state.is_pending());
    }

    #[test]
    fn request_carries_the_full_transcript() {
        let mut controller = controller();
        let mut state = HelpdeskState::default();

        controller.send(&mut state, "hello");

        let body = request_json(&controller, 0);
        let messages = body["messages"].as_array().expect("messages array");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], persona::SYSTEM_INSTRUCTION);
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[1]["content"], "hello");
    }

    #[test]
    fn successful_reply_is_displayed_and_clears_pending() {
        let mut controller = controller();
        let mut state = HelpdeskState::default();
        let id = controller.send(&mut state, "hi").expect("sent");

        let outcome =
            controller.complete(&mut state, ExchangeCompletion::body(id, r#"{"message": "Hello!"}"#));

        assert_eq!(outcome, ExchangeOutcome::Replied);
        assert!(!state.is_pending());
        assert_eq!(state.display_log().messages().len(), 3);
        let last = state.display_log().last().expect("reply");
        assert_eq!(last.text, "Hello!");
        assert_eq!(last.author, MessageAuthor::Assistant);
    }

    #[test]
    fn recorded_reply_becomes_context_for_the_next_request() {
        let mut controller = controller();
        let mut state = HelpdeskState::default();
        let id = controller.send(&mut state, "hi").expect("sent");
        controller.complete(&mut state, ExchangeCompletion::body(id, r#"{"message":"Hello!"}"#));

        controller.send(&mut state, "tell me more");

        let body = request_json(&controller, 1);
        let roles: Vec<&str> = body["messages"]
            .as_array()
            .expect("messages")
            .iter()
            .map(|turn| turn["role"].as_str().expect("role"))
            .collect();
        assert_eq!(roles, vec!["system", "user", "assistant", "user"]);
        assert_eq!(body["messages"][2]["content"], "Hello!");
    }

    #[test]
    fn replies_are_not_recorded_when_disabled() {
        let settings = ExchangeSettings {
            labels: RoleLabels::with_assistant_label("bot"),
            record_assistant_replies: false,
        };
        let mut controller = ExchangeController::new(RecordingDispatcher::default(), settings);
        let mut state = HelpdeskState::default();
        let id = controller.send(&mut state, "hi").expect("sent");

        controller.complete(&mut state, ExchangeCompletion::body(id, r#"{"message":"Hello!"}"#));

        assert_eq!(state.transcript().turns().len(), 2);
        assert_eq!(state.display_log().last().map(|m| m.text.as_str()), Some("Hello!"));
    }

    #[test]
    fn transport_failure_shows_description_and_keeps_transcript() {
        let mut controller = controller();
        let mut state = HelpdeskState::default();
        let id = controller.send(&mut state, "hi").expect("sent");
        let transcript_before = state.transcript().clone();

        let outcome = controller.complete(&mut state, ExchangeCompletion::failed(id, offline()));

        assert_eq!(outcome, ExchangeOutcome::TransportFailed);
        assert!(!state.is_pending());
        assert_eq!(state.transcript(), &transcript_before);
        assert_eq!(state.display_log().messages().len(), 3);
        let last = state.display_log().last().expect("error entry");
        assert_eq!(last.author, MessageAuthor::Error);
        assert_eq!(
            last.text,
            "Error: error sending request: connection refused"
        );
    }

    #[test]
    fn malformed_reply_shows_generic_error_and_keeps_transcript() {
        for body in ["not json", r#"{"reply":"Hello!"}"#, r#"{"message":7}"#, "[]"] {
            let mut controller = controller();
            let mut state = HelpdeskState::default();
            let id = controller.send(&mut state, "hi").expect("sent");
            let transcript_before = state.transcript().clone();

            let outcome = controller.complete(&mut state, ExchangeCompletion::body(id, body));

            assert_eq!(outcome, ExchangeOutcome::MalformedReply, "body: {body}");
            assert!(!state.is_pending());
            assert_eq!(state.transcript(), &transcript_before);
            assert_eq!(state.display_log().messages().len(), 3);
            let last = state.display_log().last().expect("error entry");
            assert_eq!(last.author, MessageAuthor::Error);
            assert_eq!(last.text, persona::GENERIC_ERROR);
        }
    }

    #[test]
    fn screen_stays_usable_after_a_failure() {
        let mut controller = controller();
        let mut state = HelpdeskState::default();
        let first = controller.send(&mut state, "hi").expect("sent");
        controller.complete(&mut state, ExchangeCompletion::failed(first, offline()));

        let second = controller.send(&mut state, "again");

        assert_eq!(second, Some(ExchangeId::new(2)));
        assert!(state.is_pending());
        assert_eq!(controller.dispatcher().requests.borrow().len(), 2);
    }

    #[test]
    fn overlapping_exchanges_apply_in_arrival_order() {
        let mut controller = controller();
        let mut state = HelpdeskState::default();
        let first = controller.send(&mut state, "one").expect("sent");
        let second = controller.send(&mut state, "two").expect("sent");
        assert_eq!(state.in_flight(), 2);

        controller.complete(&mut state, ExchangeCompletion::body(second, r#"{"message":"B"}"#));
        assert!(state.is_pending());
        controller.complete(&mut state, ExchangeCompletion::failed(first, offline()));
        assert!(!state.is_pending());

        let texts: Vec<&str> = state
            .display_log()
            .messages()
            .iter()
            .skip(1)
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(
            texts,
            vec![
                "one",
                "two",
                "B",
                "Error: error sending request: connection refused"
            ]
        );
    }

    #[test]
    fn settings_follow_backend_config() {
        let config = BackendConfig {
            assistant_role_label: "bot".to_owned(),
            record_assistant_replies: false,
            ..BackendConfig::default()
        };

        let settings = ExchangeSettings::from_config(&config);

        assert_eq!(settings.labels.assistant, "bot");
        assert_eq!(settings.labels.user, "user");
        assert!(!settings.record_assistant_replies);
    }
}
