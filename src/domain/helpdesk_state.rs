use super::{
    display_log::DisplayLog,
    message_input_state::MessageInputState,
    persona,
    transcript::Transcript,
};

/// Everything the helpdesk screen shows, owned by the UI thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpdeskState {
    running: bool,
    transcript: Transcript,
    display_log: DisplayLog,
    input: MessageInputState,
    in_flight: usize,
    /// Lines scrolled up from the newest message.
    scroll_back: usize,
}

impl Default for HelpdeskState {
    fn default() -> Self {
        Self::new(persona::SYSTEM_INSTRUCTION, persona::GREETING)
    }
}

impl HelpdeskState {
    pub fn new(system_instruction: &str, greeting: &str) -> Self {
        Self {
            running: true,
            transcript: Transcript::new(system_instruction),
            display_log: DisplayLog::new(greeting),
            input: MessageInputState::default(),
            in_flight: 0,
            scroll_back: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn transcript_mut(&mut self) -> &mut Transcript {
        &mut self.transcript
    }

    pub fn display_log(&self) -> &DisplayLog {
        &self.display_log
    }

    pub fn display_log_mut(&mut self) -> &mut DisplayLog {
        &mut self.display_log
    }

    pub fn input(&self) -> &MessageInputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut MessageInputState {
        &mut self.input
    }

    /// True while at least one exchange awaits its reply.
    pub fn is_pending(&self) -> bool {
        self.in_flight > 0
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn begin_exchange(&mut self) {
        self.in_flight += 1;
        self.scroll_back = 0;
    }

    pub fn finish_exchange(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.scroll_back = 0;
    }

    pub fn scroll_back(&self) -> usize {
        self.scroll_back
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_back = self.scroll_back.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(lines);
    }

    /// Keeps `scroll_back` within the rendered conversation height.
    pub fn clamp_scroll_back(&mut self, max: usize) {
        self.scroll_back = self.scroll_back.min(max);
    }
}
