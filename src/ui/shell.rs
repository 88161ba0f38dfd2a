use anyhow::Result;

use crate::{
    domain::helpdesk_state::HelpdeskState,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
    },
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        endpoint = %context.client.endpoint(),
        "starting helpdesk TUI"
    );

    let mut terminal = TerminalSession::new()?;
    run_loop(event_source, orchestrator, |state| {
        terminal.draw(|frame| view::render(frame, state))
    })?;

    tracing::info!(
        in_flight = orchestrator.state().in_flight(),
        "helpdesk TUI stopped"
    );
    Ok(())
}

fn run_loop<F>(
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
    mut draw: F,
) -> Result<()>
where
    F: FnMut(&mut HelpdeskState) -> Result<()>,
{
    while orchestrator.state().is_running() {
        draw(orchestrator.state_mut())?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    Ok(())
}
