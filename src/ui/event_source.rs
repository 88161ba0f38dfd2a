use std::{
    sync::mpsc::{Receiver, TryRecvError},
    time::Duration,
};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    domain::{
        events::{AppEvent, KeyInput},
        exchange::ExchangeCompletion,
    },
    usecases::contracts::AppEventSource,
};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Merges finished exchanges and terminal key presses into one event stream.
///
/// Completions are drained first so replies show up even while the user is
/// typing.
pub struct CrosstermEventSource {
    completions: Receiver<ExchangeCompletion>,
    completions_open: bool,
}

impl CrosstermEventSource {
    pub fn new(completions: Receiver<ExchangeCompletion>) -> Self {
        Self {
            completions,
            completions_open: true,
        }
    }

    fn next_completion(&mut self) -> Option<ExchangeCompletion> {
        if !self.completions_open {
            return None;
        }

        match self.completions.try_recv() {
            Ok(completion) => Some(completion),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                tracing::warn!("exchange completion channel closed");
                self.completions_open = false;
                None
            }
        }
    }
}

impl AppEventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if let Some(completion) = self.next_completion() {
            return Ok(Some(AppEvent::ExchangeCompleted(completion)));
        }

        if !event::poll(EVENT_POLL_TIMEOUT)? {
            return Ok(Some(AppEvent::Tick));
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(map_key(key)),
            Event::Resize(..) => Ok(Some(AppEvent::Tick)),
            _ => Ok(None),
        }
    }
}

fn map_key(key: KeyEvent) -> Option<AppEvent> {
    // AltGr arrives as CONTROL | ALT and produces printable characters.
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::ALT);

    let name = match key.code {
        KeyCode::Esc => return Some(AppEvent::QuitRequested),
        KeyCode::Char('c' | 'C') if ctrl => return Some(AppEvent::QuitRequested),
        KeyCode::Char(ch) => ch.to_string(),
        KeyCode::Enter => "enter".to_owned(),
        KeyCode::Backspace => "backspace".to_owned(),
        KeyCode::Delete => "delete".to_owned(),
        KeyCode::Left => "left".to_owned(),
        KeyCode::Right => "right".to_owned(),
        KeyCode::Home => "home".to_owned(),
        KeyCode::End => "end".to_owned(),
        KeyCode::PageUp | KeyCode::Up => "pageup".to_owned(),
        KeyCode::PageDown | KeyCode::Down => "pagedown".to_owned(),
        _ => return None,
    };

    Some(AppEvent::InputKey(KeyInput::new(name, ctrl)))
}

#[cfg(test)]
pub struct MockEventSource {
    queue: std::collections::VecDeque<AppEvent>,
}

#[cfg(test)]
impl MockEventSource {
    pub fn from(events: Vec<AppEvent>) -> Self {
        Self {
            queue: events.into(),
        }
    }
}

#[cfg(test)]
impl AppEventSource for MockEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        Ok(self.queue.pop_front())
    }
}
