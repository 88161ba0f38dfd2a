//! Style definitions for the helpdesk screen.

use ratatui::style::{Color, Modifier, Style};

// =============================================================================
// Header and chrome
// =============================================================================

/// Style for the product title in the header.
pub fn header_title_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for contact shortcut hints in the header.
pub fn header_hint_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn panel_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for the key help line at the bottom.
pub fn status_line_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

// =============================================================================
// Conversation
// =============================================================================

/// User bubbles: blue, aligned right.
pub fn user_bubble_style() -> Style {
    Style::default().fg(Color::White).bg(Color::Blue)
}

/// Assistant bubbles: gray, aligned left.
pub fn assistant_bubble_style() -> Style {
    Style::default().fg(Color::White).bg(Color::DarkGray)
}

pub fn error_bubble_style() -> Style {
    Style::default().fg(Color::White).bg(Color::Red)
}

/// Style for the time shown above each bubble.
pub fn message_time_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

pub fn typing_indicator_style() -> Style {
    Style::default()
        .fg(Color::Gray)
        .add_modifier(Modifier::ITALIC)
}

// =============================================================================
// Input field
// =============================================================================

pub fn input_prompt_style() -> Style {
    Style::default().fg(Color::Cyan)
}

pub fn input_text_style() -> Style {
    Style::default().fg(Color::White)
}

pub fn input_placeholder_style() -> Style {
    Style::default().fg(Color::DarkGray)
}
