use anyhow::Result;

use crate::domain::{events::AppEvent, exchange::ExchangeRequest, helpdesk_state::HelpdeskState};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait ShellOrchestrator {
    fn state(&self) -> &HelpdeskState;
    fn state_mut(&mut self) -> &mut HelpdeskState;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}

/// Issues a serialized request without blocking the caller.
///
/// Implementations must eventually deliver exactly one completion for every
/// dispatched request back to the thread that owns the screen state.
pub trait ExchangeDispatcher {
    fn dispatch(&self, request: ExchangeRequest);
}
