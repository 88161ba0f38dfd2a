use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::domain::helpdesk_state::HelpdeskState;

use super::message_input::render_message_input;
use super::message_rendering::conversation_lines;
use super::styles;

const TITLE: &str = "RuggedEdge AI Helpdesk";

pub fn render(frame: &mut Frame<'_>, state: &mut HelpdeskState) {
    // Input field takes 3 rows: border, text, border.
    let [header_area, conversation_area, input_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

    frame.render_widget(Paragraph::new(header_line()), header_area);
    render_conversation(frame, conversation_area, state);
    render_message_input(frame, input_area, state.input());
    frame.render_widget(
        Paragraph::new(Span::styled(status_line(state), styles::status_line_style())),
        status_area,
    );
}

fn render_conversation(frame: &mut Frame<'_>, area: Rect, state: &mut HelpdeskState) {
    let inner_width = usize::from(area.width.saturating_sub(2));
    let viewport = usize::from(area.height.saturating_sub(2));

    let lines = conversation_lines(
        state.display_log().messages(),
        state.is_pending(),
        inner_width,
    );
    let total = lines.len();

    state.clamp_scroll_back(total.saturating_sub(viewport));
    let offset = scroll_offset(total, viewport, state.scroll_back());

    let title = if state.scroll_back() > 0 {
        "Conversation (scrolled)"
    } else {
        "Conversation"
    };

    let paragraph = Paragraph::new(lines).scroll((offset, 0)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(styles::panel_border_style()),
    );
    frame.render_widget(paragraph, area);
}

/// First visible line so the newest message sits at the bottom.
fn scroll_offset(total: usize, viewport: usize, scroll_back: usize) -> u16 {
    let offset = total.saturating_sub(viewport).saturating_sub(scroll_back);
    u16::try_from(offset).unwrap_or(u16::MAX)
}

fn header_line() -> Line<'static> {
    Line::from(vec![
        Span::styled(TITLE.to_owned(), styles::header_title_style()),
        Span::styled(
            "   ^T call   ^E mail   ^O website".to_owned(),
            styles::header_hint_style(),
        ),
    ])
}

fn status_line(state: &HelpdeskState) -> String {
    let help = "Enter send | PgUp/PgDn scroll | Esc quit";

    match state.in_flight() {
        0 => help.to_owned(),
        1 => format!("{help} | waiting for reply"),
        n => format!("{help} | waiting for {n} replies"),
    }
}
