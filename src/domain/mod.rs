//! Domain layer: conversation entities and screen state.

pub mod display_log;
pub mod events;
pub mod exchange;
pub mod helpdesk_state;
pub mod message_input_state;
pub mod persona;
pub mod transcript;

/// Returns the domain module name for smoke checks.
pub fn module_name() -> &'static str {
    "domain"
}
