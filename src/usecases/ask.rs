//! Single exchange without the terminal UI.

use std::sync::mpsc::Receiver;

use anyhow::{anyhow, bail, Result};

use crate::domain::{
    display_log::DisplayMessage, exchange::ExchangeCompletion, helpdesk_state::HelpdeskState,
};

use super::{
    contracts::ExchangeDispatcher,
    exchange::{ExchangeController, ExchangeOutcome},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AskOutput {
    pub outcome: ExchangeOutcome,
    pub message: DisplayMessage,
}

/// Sends `question` on a fresh conversation and blocks until its completion
/// has been applied.
pub fn ask<D>(
    controller: &mut ExchangeController<D>,
    completions: &Receiver<ExchangeCompletion>,
    question: &str,
) -> Result<AskOutput>
where
    D: ExchangeDispatcher,
{
    let question = question.trim();
    if question.is_empty() {
        bail!("question is empty");
    }

    let mut state = HelpdeskState::default();
    let Some(id) = controller.send(&mut state, question) else {
        let reason = state
            .display_log()
            .last()
            .map(|message| message.text.clone())
            .unwrap_or_default();
        bail!("exchange was not sent: {reason}");
    };

    let completion = completions
        .recv()
        .map_err(|_| anyhow!("exchange {id} ended without a completion"))?;
    let outcome = controller.complete(&mut state, completion);

    let message = state
        .display_log()
        .last()
        .cloned()
        .ok_or_else(|| anyhow!("display log is empty"))?;

    Ok(AskOutput { outcome, message })
}
