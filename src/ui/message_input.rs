//! Message input field rendering.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::domain::message_input_state::MessageInputState;

use super::styles;

const PLACEHOLDER_TEXT: &str = "Type your message here...";

const PROMPT_SYMBOL: &str = "> ";

pub fn render_message_input(frame: &mut Frame<'_>, area: Rect, input_state: &MessageInputState) {
    let inner_width = usize::from(area.width.saturating_sub(2));
    let scroll_x = horizontal_scroll(input_state, inner_width);

    let paragraph = Paragraph::new(build_input_line(input_state))
        .scroll((0, scroll_x))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles::panel_border_style()),
        );
    frame.render_widget(paragraph, area);

    let cursor_offset = cursor_column(input_state).saturating_sub(scroll_x);
    let cursor_x = area
        .x
        .saturating_add(1)
        .saturating_add(cursor_offset);
    frame.set_cursor_position((cursor_x, area.y.saturating_add(1)));
}

fn build_input_line(input_state: &MessageInputState) -> Line<'static> {
    let prompt = Span::styled(PROMPT_SYMBOL.to_owned(), styles::input_prompt_style());

    if input_state.is_empty() {
        Line::from(vec![
            prompt,
            Span::styled(PLACEHOLDER_TEXT.to_owned(), styles::input_placeholder_style()),
        ])
    } else {
        Line::from(vec![
            prompt,
            Span::styled(input_state.text(), styles::input_text_style()),
        ])
    }
}

/// Display column of the cursor, prompt included.
fn cursor_column(input_state: &MessageInputState) -> u16 {
    let width = PROMPT_SYMBOL.width() + input_state.text_before_cursor().width();
    u16::try_from(width).unwrap_or(u16::MAX)
}

/// Scrolls long input so the cursor stays inside the field.
fn horizontal_scroll(input_state: &MessageInputState, inner_width: usize) -> u16 {
    if inner_width == 0 {
        return 0;
    }

    let column = usize::from(cursor_column(input_state));
    let overflow = (column + 1).saturating_sub(inner_width);
    u16::try_from(overflow).unwrap_or(u16::MAX)
}
