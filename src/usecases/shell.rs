use anyhow::Result;

use crate::{
    domain::{
        events::{AppEvent, KeyInput},
        helpdesk_state::HelpdeskState,
    },
    infra::{config::ContactConfig, contracts::ExternalOpener},
};

use super::{
    contracts::{ExchangeDispatcher, ShellOrchestrator},
    exchange::ExchangeController,
};

const CONTACT_OPEN_FAILED: &str = "HELPDESK_CONTACT_OPEN_FAILED";
const SCROLL_STEP: usize = 5;

pub struct HelpdeskOrchestrator<D, O>
where
    D: ExchangeDispatcher,
    O: ExternalOpener,
{
    state: HelpdeskState,
    exchanges: ExchangeController<D>,
    opener: O,
    contact: ContactConfig,
}

impl<D, O> HelpdeskOrchestrator<D, O>
where
    D: ExchangeDispatcher,
    O: ExternalOpener,
{
    pub fn new(exchanges: ExchangeController<D>, opener: O, contact: ContactConfig) -> Self {
        Self {
            state: HelpdeskState::default(),
            exchanges,
            opener,
            contact,
        }
    }

    fn handle_key(&mut self, key: KeyInput) {
        if key.ctrl {
            match key.key.as_str() {
                "t" => self.open_contact(self.contact.phone_uri.clone()),
                "e" => self.open_contact(self.contact.mail_uri.clone()),
                "o" => self.open_contact(self.contact.website_url.clone()),
                _ => {}
            }
            return;
        }

        if let Some(ch) = key.printable_char() {
            self.state.input_mut().insert_char(ch);
            return;
        }

        match key.key.as_str() {
            "enter" => self.submit_input(),
            "backspace" => self.state.input_mut().delete_char_before(),
            "delete" => self.state.input_mut().delete_char_at(),
            "left" => self.state.input_mut().move_cursor_left(),
            "right" => self.state.input_mut().move_cursor_right(),
            "home" => self.state.input_mut().move_cursor_home(),
            "end" => self.state.input_mut().move_cursor_end(),
            "pageup" => self.state.scroll_up(SCROLL_STEP),
            "pagedown" => self.state.scroll_down(SCROLL_STEP),
            _ => {}
        }
    }

    fn submit_input(&mut self) {
        let text = self.state.input().text();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }

        self.exchanges.send(&mut self.state, trimmed);
    }

    fn open_contact(&self, target: String) {
        if let Err(error) = self.opener.open(&target) {
            tracing::warn!(
                code = CONTACT_OPEN_FAILED,
                target_uri = %target,
                error = ?error,
                "contact action could not be opened"
            );
        }
    }
}

impl<D, O> ShellOrchestrator for HelpdeskOrchestrator<D, O>
where
    D: ExchangeDispatcher,
    O: ExternalOpener,
{
    fn state(&self) -> &HelpdeskState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut HelpdeskState {
        &mut self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => self.handle_key(key),
            AppEvent::ExchangeCompleted(completion) => {
                self.exchanges.complete(&mut self.state, completion);
            }
        }

        Ok(())
    }
}
